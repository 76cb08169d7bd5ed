//! Raw DMA buffers
//!
//! Input records are 12 bytes (x, y, bearing as little-endian `u32` bit
//! patterns); output words are 4 bytes. Sideband signals are not stored:
//! TKEEP is always full and TLAST falls on the last element of the buffer.

use std::io::{Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{AxisError, AxisResult};
use crate::word::{InputWord, OutputWord, OUTPUT_KEEP};

/// Bytes per input record
pub const INPUT_RECORD_BYTES: usize = 12;

/// Bytes per output word
pub const OUTPUT_WORD_BYTES: usize = 4;

/// Write an input frame
pub fn write_input_frame<W: Write>(writer: &mut W, words: &[InputWord]) -> AxisResult<()> {
    for word in words {
        for lane in word.lanes() {
            writer.write_u32::<LittleEndian>(lane)?;
        }
    }
    Ok(())
}

/// Read an input frame
pub fn read_input_frame(bytes: &[u8]) -> AxisResult<Vec<InputWord>> {
    let count = whole_records(bytes.len(), INPUT_RECORD_BYTES)?;
    let mut reader = Cursor::new(bytes);
    let mut words = Vec::with_capacity(count);

    for index in 0..count {
        let x = reader.read_u32::<LittleEndian>()?;
        let y = reader.read_u32::<LittleEndian>()?;
        let bearing = reader.read_u32::<LittleEndian>()?;
        words.push(InputWord::from_lanes([x, y, bearing], index + 1 == count));
    }

    Ok(words)
}

/// Write an output frame
pub fn write_output_frame<W: Write>(writer: &mut W, words: &[OutputWord]) -> AxisResult<()> {
    for word in words {
        writer.write_u32::<LittleEndian>(word.data)?;
    }
    Ok(())
}

/// Read an output frame
pub fn read_output_frame(bytes: &[u8]) -> AxisResult<Vec<OutputWord>> {
    let count = whole_records(bytes.len(), OUTPUT_WORD_BYTES)?;
    let mut reader = Cursor::new(bytes);
    let mut words = Vec::with_capacity(count);

    for index in 0..count {
        let data = reader.read_u32::<LittleEndian>()?;
        words.push(OutputWord {
            data,
            keep: OUTPUT_KEEP,
            last: index + 1 == count,
        });
    }

    Ok(words)
}

fn whole_records(len: usize, record: usize) -> AxisResult<usize> {
    if len % record == 0 {
        Ok(len / record)
    } else {
        Err(AxisError::TruncatedBuffer { len, record })
    }
}
