use compareoffers::{CompareError, OfferError, OFFER_PATTERN};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_stderr_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = theme::icon_error(supports_unicode);
    let mut out = ColoredText::error(format!("{} {}", icon, err)).render(supports_color);
    out.push('\n');

    if let Some(hint) = hint_for(err) {
        let arrow = theme::icon_arrow(supports_unicode);
        out.push_str(&ColoredText::dim(format!("  {} {}", arrow, hint)).render(supports_color));
        out.push('\n');
    }

    out
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    let offer_err = err.downcast_ref::<OfferError>().or_else(|| {
        match err.downcast_ref::<CompareError>() {
            Some(CompareError::Offer(inner)) => Some(inner),
            _ => None,
        }
    });
    if offer_err.is_some() {
        return Some(format!("Offer pattern: {}", OFFER_PATTERN));
    }

    match err.downcast_ref::<CompareError>()? {
        CompareError::InvalidOfferFormat { .. } | CompareError::OfferCount { .. } => {
            Some(format!("Offer pattern: {}", OFFER_PATTERN))
        }
        CompareError::InvalidSalesLevels { .. } => {
            Some("Sales levels are comma-separated whole numbers, e.g. 1000,2000,4000".to_string())
        }
        CompareError::ConfigNotFound { .. } | CompareError::Config { .. } => {
            Some("Run with -v to see which config file is loaded".to_string())
        }
        _ => None,
    }
}

pub fn format_config_warning(warning: &compareoffers::ConfigWarning, supports_unicode: bool) -> String {
    let icon = theme::icon_warning(supports_unicode);
    let mut out = match warning.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}",
            icon,
            warning.key,
            warning.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}",
            icon,
            warning.key,
            warning.file.display()
        ),
    };
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}
