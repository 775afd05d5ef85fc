//! Parse settings string sent by any client.
//!
//! The only key at present is `encoder`, which holds the base address and the
//! end marker and overflow policies.  Unknown keys are ignored so that a client can
//! share one settings object among several tools.

use serde_json;
use log::error;
use crate::lang::Error;
use crate::DYNERR;

/// What follows the last record
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum EndMarker {
    /// nothing, the last link address dangles just past the last record
    None,
    /// two zero bytes, the conventional end of program
    Zero
}

/// What to do when a line number or address does not fit in 16 bits
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Overflow {
    /// keep the low 16 bits
    Wrap,
    /// fail with an error
    Strict
}

impl std::str::FromStr for EndMarker {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "zero" => Ok(Self::Zero),
            _ => Err(Error::Settings)
        }
    }
}

impl std::str::FromStr for Overflow {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "wrap" => Ok(Self::Wrap),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::Settings)
        }
    }
}

#[derive(Clone,Debug)]
pub struct Settings {
    pub base_address: u16,
    pub end_marker: EndMarker,
    pub overflow: Overflow
}

impl Settings {
    pub fn new() -> Self {
        Self {
            base_address: super::DEFAULT_ADDRESS,
            end_marker: EndMarker::None,
            overflow: Overflow::Wrap
        }
    }
}

fn update_json_address(maybe_obj: &serde_json::Value, key: &str, curr: &mut u16) -> Result<(),Error> {
    if let Some(val) = maybe_obj.get(key) {
        match val.as_u64() {
            Some(x) if x <= u16::MAX as u64 => *curr = x as u16,
            _ => {
                error!("{} must be an integer from 0 to 65535, got {}",key,val);
                return Err(Error::Settings);
            }
        }
    }
    Ok(())
}

fn update_json_enum<T: std::str::FromStr>(maybe_obj: &serde_json::Value, key: &str, curr: &mut T) -> Result<(),Error> {
    if let Some(val) = maybe_obj.get(key) {
        match val.as_str().map(|s| T::from_str(s)) {
            Some(Ok(x)) => *curr = x,
            _ => {
                error!("{} has an unexpected value {}",key,val);
                return Err(Error::Settings);
            }
        }
    }
    Ok(())
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => {
            error!("settings could not be parsed: {}",e);
            return Err(Box::new(e));
        }
    };
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "encoder" => {
                    update_json_address(val,"baseAddress",&mut ans.base_address)?;
                    update_json_enum(val,"endMarker",&mut ans.end_marker)?;
                    update_json_enum(val,"overflow",&mut ans.overflow)?;
                },
                _ => {}
            }
        }
    } else {
        error!("settings must be a JSON object");
        return Err(Box::new(Error::Settings));
    }
    Ok(ans)
}

#[cfg(test)]
mod tests {
    use super::{parse,EndMarker,Overflow};
    #[test]
    fn defaults() {
        let settings = parse("{}").expect("settings failed");
        assert_eq!(settings.base_address,0x8001);
        assert_eq!(settings.end_marker,EndMarker::None);
        assert_eq!(settings.overflow,Overflow::Wrap);
    }
    #[test]
    fn encoder_keys() {
        let json = r#"{"encoder": {"baseAddress": 2049, "endMarker": "zero", "overflow": "strict"}, "other": 1}"#;
        let settings = parse(json).expect("settings failed");
        assert_eq!(settings.base_address,2049);
        assert_eq!(settings.end_marker,EndMarker::Zero);
        assert_eq!(settings.overflow,Overflow::Strict);
    }
    #[test]
    fn bad_values() {
        assert!(parse(r#"{"encoder": {"baseAddress": 65536}}"#).is_err());
        assert!(parse(r#"{"encoder": {"baseAddress": -1}}"#).is_err());
        assert!(parse(r#"{"encoder": {"endMarker": "sentinel"}}"#).is_err());
        assert!(parse(r#"{"encoder": {"overflow": true}}"#).is_err());
        assert!(parse("[1,2]").is_err());
        assert!(parse("{").is_err());
    }
}
