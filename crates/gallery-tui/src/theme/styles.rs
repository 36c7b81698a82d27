//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use gallery_app::FetchState;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Gallery styles ---
pub fn group_header(fallback: bool) -> Style {
    let color = if fallback {
        palette::FALLBACK_LABEL
    } else {
        palette::GROUP_HEADER
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Icon, label, and style for the collection fetch state
pub fn fetch_indicator(fetch: &FetchState) -> (&'static str, &'static str, Style) {
    match fetch {
        FetchState::NotLoaded => ("○", "Waiting", Style::default().fg(palette::TEXT_MUTED)),
        FetchState::Loading => ("↻", "Loading", Style::default().fg(palette::STATUS_YELLOW)),
        FetchState::Loaded => ("●", "Ready", Style::default().fg(palette::STATUS_GREEN)),
        FetchState::Failed { .. } => ("✗", "Failed", Style::default().fg(palette::STATUS_RED)),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
