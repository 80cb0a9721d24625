use std::io::Write;

use anyhow::Result;
use compareoffers::config::{validate_price, Config, LoadedConfig};
use compareoffers::{is_valid_notation, parse_offer, CompareError, Comparison, Offer, SalesLevels};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

/// Values a comparison runs with, after flags and config are merged
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub price: f64,
    pub sales_levels: SalesLevels,
    pub offers: [Offer; 2],
}

pub fn cmd_compare(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let loaded = Config::discover(cli.config.as_deref(), &working_dir)?;
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("using built-in defaults"),
    }

    let ui = UiContext::new(cli.json, cli.color, &loaded.config);
    for warning in &loaded.warnings {
        let text = crate::ui::error::format_config_warning(warning, ui.unicode);
        eprintln!("{}", ColoredText::warning(text).render(ui.color));
    }

    let input = resolve_input(cli, &loaded)?;
    tracing::debug!(
        price = input.price,
        sales_levels = %input.sales_levels,
        first = %input.offers[0],
        second = %input.offers[1],
        "comparing offers"
    );

    let comparison = Comparison::build(
        &input.offers[0],
        &input.offers[1],
        input.price,
        &input.sales_levels,
    );

    if ui.json {
        emit_json(&input, &comparison)?;
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    write!(
        out,
        "{}",
        crate::ui::views::compare::render_comparison_table(&comparison, ui.color, ui.unicode)
    )?;
    write!(
        out,
        "{}",
        crate::ui::views::compare::render_summary(&comparison, ui.color, ui.unicode)
    )?;
    Ok(())
}

/// Merge flags over config and validate every input, in the order the user
/// is most likely to want to hear about: price, sales levels, offers.
pub fn resolve_input(cli: &Cli, loaded: &LoadedConfig) -> Result<ResolvedInput, CompareError> {
    let price = cli.price.unwrap_or(loaded.config.comparison.price);
    validate_price(price)?;

    let sales_levels = match &cli.sales_levels {
        Some(raw) => SalesLevels::parse(raw)?,
        None => loaded.config.comparison.sales_levels.clone(),
    };

    let [first, second] = <&[String; 2]>::try_from(cli.offers.as_slice()).map_err(|_| {
        CompareError::OfferCount {
            count: cli.offers.len(),
        }
    })?;

    Ok(ResolvedInput {
        price,
        sales_levels,
        offers: [read_offer(first)?, read_offer(second)?],
    })
}

fn read_offer(raw: &str) -> Result<Offer, CompareError> {
    if !is_valid_notation(raw) {
        return Err(CompareError::InvalidOfferFormat {
            literal: raw.to_string(),
        });
    }
    Ok(parse_offer(raw)?)
}

fn emit_json(input: &ResolvedInput, comparison: &Comparison) -> Result<()> {
    let mut out = std::io::stdout().lock();
    crate::ui::json::write_event(
        &mut out,
        &serde_json::json!({
            "event": "start",
            "command": "compare",
            "price": input.price,
            "sales_levels": input.sales_levels,
            "offers": [input.offers[0].to_string(), input.offers[1].to_string()],
        }),
    )?;

    for row in &comparison.rows {
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "row",
                "sales": row.sales,
                "offer_1": row.first,
                "offer_2": row.second,
                "difference": row.difference,
            }),
        )?;
    }

    crate::ui::json::write_event(
        &mut out,
        &serde_json::json!({
            "event": "complete",
            "command": "compare",
            "crossover": comparison.crossover,
            "earn_out": comparison.earn_out,
            "net_difference": comparison.net_difference(),
        }),
    )?;
    Ok(())
}
