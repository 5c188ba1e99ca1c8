use serde::Serialize;

use crate::parsing::blocks::LayoutBlock;

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: &'static str,
    pub content: String,
}

pub fn normalize(blocks: &[LayoutBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let content = match b {
                LayoutBlock::Spacer(height) => format!("{height}pt"),
                other => other.text().unwrap_or_default().to_string(),
            };
            BlockSnap {
                kind: b.kind().name(),
                content,
            }
        })
        .collect();
    Snap { blocks }
}
