use anyhow::{bail, Context, Result};
use radix_engine::{decode_bytes, encode_ascii, Base};

/// Encode `text` to hex, or with `from` decode byte-aligned digits to text.
pub fn ascii(text: &str, from: Option<Base>) -> Result<String> {
    match from {
        None | Some(Base::Ascii) => {
            encode_ascii(text).with_context(|| format!("Cannot encode `{text}` as ASCII"))
        }
        Some(base @ (Base::Hex | Base::Binary)) => {
            let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let decoded = decode_bytes(base, &digits);
            if decoded.is_empty() {
                bail!("`{text}` is not whole bytes of printable ASCII in {base}");
            }
            Ok(decoded)
        }
        Some(base) => bail!("cannot decode bytes from {base}"),
    }
}

pub fn ascii_command(text: &str, from: Option<Base>) -> Result<()> {
    println!("{}", ascii(text, from)?);
    Ok(())
}
