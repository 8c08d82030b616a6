use anyhow::{Context, Result};
use radix_engine::{
    fixed_width_panels, twos_complement_decode, Base, ConverterConfig, TwosComplement, Width,
};

/// Encode a decimal value at each width. An empty `widths` falls back to the
/// configured panels.
pub fn panels(
    config: &ConverterConfig,
    value: &str,
    widths: &[Width],
) -> Result<Vec<(Width, TwosComplement)>> {
    let value = Base::Decimal
        .parse_numeral(value)
        .with_context(|| format!("Invalid decimal value `{value}`"))?;
    let widths = if widths.is_empty() {
        &config.fixed_width_panels[..]
    } else {
        widths
    };
    Ok(fixed_width_panels(value, widths))
}

pub fn render_panels(panels: &[(Width, TwosComplement)]) -> String {
    panels
        .iter()
        .map(|(width, encoding)| format!("{:<7} {encoding}\n", width.to_string()))
        .collect()
}

pub fn panels_command(
    config: &ConverterConfig,
    value: &str,
    widths: &[Width],
    decode: bool,
) -> Result<()> {
    if decode {
        let decoded = twos_complement_decode(value.trim())
            .with_context(|| format!("Invalid bit string `{value}`"))?;
        println!("{decoded}");
        return Ok(());
    }
    print!("{}", render_panels(&panels(config, value, widths)?));
    Ok(())
}
