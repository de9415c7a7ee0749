//! Just enough Markdown for model replies and the sidebar guide:
//! headings, bullets, numbered items, fenced code and `**bold**`.
//! Anything else is shown as plain text.

use egui::{RichText, Ui};
use crate::theme::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Bullet(String),
    Numbered { marker: String, text: String },
    Code(String),
    Paragraph(String),
    Blank,
}

/// Split text into display blocks, line by line.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            match code.take() {
                Some(lines) => blocks.push(Block::Code(lines.join("\n"))),
                None => code = Some(Vec::new()),
            }
            continue;
        }
        if let Some(lines) = code.as_mut() {
            lines.push(line);
            continue;
        }
        blocks.push(parse_line(line));
    }

    // An unclosed fence still shows its content (common mid-stream).
    if let Some(lines) = code {
        blocks.push(Block::Code(lines.join("\n")));
    }
    blocks
}

fn parse_line(line: &str) -> Block {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }

    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
        return Block::Heading {
            level: hashes as u8,
            text: trimmed[hashes..].trim().to_string(),
        };
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Block::Bullet(rest.to_string());
    }

    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && trimmed[digits..].starts_with(". ") {
        return Block::Numbered {
            marker: trimmed[..digits + 1].to_string(),
            text: trimmed[digits + 2..].to_string(),
        };
    }

    Block::Paragraph(trimmed.to_string())
}

/// Split on `**` markers: `(text, bold)` runs. An unmatched marker is kept literally.
pub fn inline_runs(text: &str) -> Vec<(String, bool)> {
    let pieces: Vec<&str> = text.split("**").collect();
    // An even piece count means the last `**` has no partner.
    let paired = if pieces.len() % 2 == 0 {
        pieces.len() - 1
    } else {
        pieces.len()
    };

    let mut runs: Vec<(String, bool)> = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        let (text, bold) = if i < paired {
            (piece.to_string(), i % 2 == 1)
        } else {
            (format!("**{}", piece), false)
        };
        if text.is_empty() {
            continue;
        }
        match runs.last_mut() {
            Some(last) if last.1 == bold => last.0.push_str(&text),
            _ => runs.push((text, bold)),
        }
    }
    runs
}

pub fn render(ui: &mut Ui, text: &str) {
    for block in parse_blocks(text) {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => 22.0,
                    2 => 19.0,
                    _ => 17.0,
                };
                ui.label(RichText::new(text).size(size).strong().color(TEXT_PRIMARY));
            }
            Block::Bullet(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("•").color(ACCENT));
                    render_inline(ui, &text);
                });
            }
            Block::Numbered { marker, text } => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(marker).color(ACCENT));
                    render_inline(ui, &text);
                });
            }
            Block::Code(code) => {
                egui::Frame::default()
                    .fill(BG_CODE)
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(code).monospace().color(TEXT_PRIMARY));
                    });
            }
            Block::Paragraph(text) => {
                ui.horizontal_wrapped(|ui| render_inline(ui, &text));
            }
            Block::Blank => ui.add_space(4.0),
        }
    }
}

fn render_inline(ui: &mut Ui, text: &str) {
    ui.spacing_mut().item_spacing.x = 0.0;
    for (run, bold) in inline_runs(text) {
        let rich = RichText::new(run).color(TEXT_PRIMARY);
        ui.label(if bold { rich.strong() } else { rich });
    }
}
