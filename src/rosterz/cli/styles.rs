use console::Style;
use once_cell::sync::Lazy;

pub(super) static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub(super) static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub(super) static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
pub(super) static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub(super) static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub(super) static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub(super) static ID: Lazy<Style> = Lazy::new(|| Style::new().dim());
