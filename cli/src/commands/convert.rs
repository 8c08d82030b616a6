use anyhow::{bail, Context, Result};
use radix_engine::{Base, ConverterConfig, Session, Snapshot};

/// Feed `text` into the `from` field, commit it, and return the snapshot.
pub fn convert(config: &ConverterConfig, from: Base, text: &str) -> Result<Snapshot> {
    let mut session = Session::new(config.clone());
    session
        .edit(from, text)
        .with_context(|| format!("Invalid {from} input `{text}`"))?;
    session
        .commit(from)
        .with_context(|| format!("Failed to evaluate {from} input `{text}`"))?;

    if session.value().is_none() {
        if from.supports_expressions() && !config.expressions {
            bail!("`{text}` is not a plain {from} numeral and expressions are disabled");
        }
        bail!("`{text}` does not denote a value");
    }
    Ok(session.snapshot())
}

/// Human-readable table of a snapshot, one `label value` row per line.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut rows: Vec<(String, String)> = snapshot
        .fields
        .iter()
        .map(|(base, text)| (base.to_string(), text.clone()))
        .collect();

    let derived = &snapshot.derived;
    if let Some(bits) = derived.bit_length {
        if derived.signed_decimal.is_empty() {
            rows.push(("length".into(), format!("{bits} bits")));
        } else {
            rows.push(("signed".into(), format!("{} ({bits} bits)", derived.signed_decimal)));
        }
    }
    rows.extend(
        derived
            .fixed_width
            .iter()
            .map(|entry| (entry.width.to_string(), entry.encoding.to_string())),
    );

    rows.iter()
        .map(|(label, value)| format!("{label:<8} {value}\n"))
        .collect()
}

pub fn convert_command(config: &ConverterConfig, from: Base, text: &str, json: bool) -> Result<()> {
    let snapshot = convert(config, from, text)?;
    if json {
        let rendered =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{rendered}");
    } else {
        print!("{}", render_snapshot(&snapshot));
    }
    Ok(())
}
