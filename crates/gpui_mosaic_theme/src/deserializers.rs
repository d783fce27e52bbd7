use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 2]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(family) => {
            let mut families = SmallVec::new();
            families.push(family);
            Ok(families)
        }
        StringOrVec::Many(families) => {
            if families.is_empty() {
                return Err(D::Error::custom("font family list can't be empty."));
            }

            Ok(families)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(pixels) => Ok(px(pixels)),

        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err(D::Error::custom("expected string to end with 'px'"));
            };

            string
                .trim()
                .parse::<f32>()
                .map(px)
                .map_err(|_| D::Error::custom("could not convert string into pixels"))
        }
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(AbsoluteLength::Pixels(px(num))),

        StringOrFloat::String(string) => {
            if let Some(value) = parse_suffixed(&string, "rem") {
                return Ok(AbsoluteLength::Rems(rems(value)));
            }

            if let Some(value) = parse_suffixed(&string, "px") {
                return Ok(AbsoluteLength::Pixels(px(value)));
            }
        }
    }

    Err(D::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => {
            return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(num))));
        }

        StringOrFloat::String(string) => {
            if let Some(value) = parse_suffixed(&string, "%") {
                return Ok(DefiniteLength::Fraction(value / 100.));
            }

            if let Some(value) = parse_suffixed(&string, "rem") {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))));
            }

            if let Some(value) = parse_suffixed(&string, "px") {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(value))));
            }
        }
    }

    Err(D::Error::custom(
        "expected f32 or string containing a f32 ending with '%', 'rem' or 'px'",
    ))
}

fn parse_suffixed(string: &str, suffix: &str) -> Option<f32> {
    string.strip_suffix(suffix)?.trim().parse::<f32>().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
