//! Key-value block parsing for `/format:list`-style command output

use std::collections::HashMap;

/// One parsed record of `key=value` pairs from a command's output
pub type FieldBlock = HashMap<String, String>;

/// Parse output that encodes a single logical record.
///
/// Each line is split once on the first `=`; lines without `=` are skipped;
/// a duplicated key keeps its last occurrence. Keys and values are trimmed.
#[must_use]
pub fn parse_single_block(lines: &[String]) -> FieldBlock {
    let mut block = FieldBlock::new();

    for line in lines {
        if let Some((key, value)) = line.trim().split_once('=') {
            block.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    block
}

/// Parse output that encodes one record per blank-line-delimited group.
///
/// A blank line closes the current block if it holds any pairs; a trailing
/// non-empty block at end of input is also emitted. Output order follows
/// input order.
#[must_use]
pub fn parse_multi_block(lines: &[String]) -> Vec<FieldBlock> {
    let mut blocks = Vec::new();
    let mut current = FieldBlock::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else if let Some((key, value)) = line.split_once('=') {
            current.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
