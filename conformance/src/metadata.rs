// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! test262 frontmatter: the YAML block between `/*---` and `---*/` at the
//! top of every test file.

use std::{fmt, path::PathBuf};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestFailurePhase {
    Parse,
    Resolution,
    Runtime,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NegativeExpectation {
    pub phase: TestFailurePhase,
    #[serde(rename = "type")]
    pub error_type: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    pub strict: Option<bool>,
    pub module: bool,
    pub raw: bool,
    pub is_async: bool,
    pub generated: bool,
    pub can_block: Option<bool>,
    pub non_deterministic: bool,
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Flags;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of test262 flags")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                use serde::de::Error;
                let conflict =
                    |flag: &str| A::Error::custom(format!("Conflicting test262 flag {flag}"));
                let mut flags = Flags::default();
                while let Some(flag) = seq.next_element::<String>()? {
                    match flag.as_str() {
                        "onlyStrict" | "noStrict" => {
                            if flags.strict.is_some() || flags.module || flags.raw {
                                return Err(conflict(&flag));
                            }
                            flags.strict = Some(flag == "onlyStrict");
                        }
                        "module" => {
                            if flags.module || flags.strict.is_some() {
                                return Err(conflict(&flag));
                            }
                            flags.module = true;
                        }
                        "raw" => {
                            if flags.raw || flags.strict.is_some() {
                                return Err(conflict(&flag));
                            }
                            flags.raw = true;
                        }
                        "async" => {
                            if flags.is_async {
                                return Err(conflict(&flag));
                            }
                            flags.is_async = true;
                        }
                        "generated" => {
                            if flags.generated {
                                return Err(conflict(&flag));
                            }
                            flags.generated = true;
                        }
                        "CanBlockIsFalse" | "CanBlockIsTrue" => {
                            if flags.can_block.is_some() {
                                return Err(conflict(&flag));
                            }
                            flags.can_block = Some(flag == "CanBlockIsTrue");
                        }
                        "non-deterministic" => {
                            if flags.non_deterministic {
                                return Err(conflict(&flag));
                            }
                            flags.non_deterministic = true;
                        }
                        _ => {
                            let message = format!("Unexpected test262 flag {flag}");
                            return Err(A::Error::custom(message));
                        }
                    };
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TestMetadata {
    pub esid: Option<String>,
    pub description: Option<String>,
    pub info: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub includes: Vec<PathBuf>,
    pub negative: Option<NegativeExpectation>,
}

const YAML_START: &str = "/*---";
const YAML_END: &str = "---*/";

/// Parses test metadata from either a full frontmatter comment or a bare
/// YAML document.
pub fn parse(source: &str) -> Result<TestMetadata, MetadataError> {
    let yaml = match source.find(YAML_START) {
        Some(start) => {
            let rest = &source[start + YAML_START.len()..];
            let end = rest.find(YAML_END).ok_or(MetadataError::Unterminated)?;
            &rest[..end]
        }
        None => source,
    };
    Ok(serde_yml::from_str(yaml)?)
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Expected YAML declaration end before the end of the file")]
    Unterminated,
    #[error("Invalid test262 metadata: {0}")]
    Yaml(#[from] serde_yml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frontmatter() {
        let source = r#"// Copyright header
/*---
esid: sec-Intl.ListFormat.supportedLocalesOf
description: Checks handling of non-object option arguments.
info: |
  SupportedLocales ( availableLocales, requestedLocales, options )
features: [Intl.ListFormat]
flags: [noStrict, CanBlockIsFalse]
---*/
body();
"#;
        let metadata = parse(source).unwrap();
        assert_eq!(
            metadata.esid.as_deref(),
            Some("sec-Intl.ListFormat.supportedLocalesOf")
        );
        assert_eq!(metadata.features, ["Intl.ListFormat"]);
        assert_eq!(metadata.flags.strict, Some(false));
        assert_eq!(metadata.flags.can_block, Some(false));
        assert!(metadata.info.unwrap().starts_with("SupportedLocales"));
        assert!(metadata.negative.is_none());
    }

    #[test]
    fn parses_negative_expectations() {
        let metadata = parse(
            "description: x\nnegative:\n  phase: runtime\n  type: TypeError\nincludes: [compareArray.js]\n",
        )
        .unwrap();
        let negative = metadata.negative.unwrap();
        assert_eq!(negative.phase, TestFailurePhase::Runtime);
        assert_eq!(negative.error_type, "TypeError");
        assert_eq!(metadata.includes, [PathBuf::from("compareArray.js")]);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse("flags: [onlyStrict, noStrict]").is_err());
        assert!(parse("flags: [module, onlyStrict]").is_err());
        assert!(parse("flags: [sloppy]").is_err());
        assert!(matches!(
            parse("/*---\ndescription: x\n"),
            Err(MetadataError::Unterminated)
        ));
    }
}
