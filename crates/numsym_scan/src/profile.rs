//! Declarative per-locale symbol configuration.
//!
//! A [`LocaleProfile`] is plain data: strings and counts, deserializable
//! with the `serde` feature. [`LocaleProfile::build`] turns it into
//! validated specs ready to scan with.

use numsym_diagnostic::{Result, WithContext};
use tracing::debug;

use crate::{
    DecimalSeparatorSpec, IntegerGroupingSequence, IntegerGroupingSpec, SpecCollection,
    SymbolPosition, SymbolSpec,
};

/// One negative-number sign convention. An empty half is absent.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignConvention {
    pub leading: String,
    pub trailing: String,
}

impl SignConvention {
    pub fn leading(symbols: &str) -> Self {
        SignConvention {
            leading: symbols.to_owned(),
            trailing: String::new(),
        }
    }

    pub fn trailing(symbols: &str) -> Self {
        SignConvention {
            leading: String::new(),
            trailing: symbols.to_owned(),
        }
    }

    pub fn paired(leading: &str, trailing: &str) -> Self {
        SignConvention {
            leading: leading.to_owned(),
            trailing: trailing.to_owned(),
        }
    }

    /// Position implied by which halves are present.
    pub fn position(&self) -> SymbolPosition {
        match (self.leading.is_empty(), self.trailing.is_empty()) {
            (false, true) => SymbolPosition::Before,
            (true, false) => SymbolPosition::After,
            (false, false) => SymbolPosition::BeforeAndAfter,
            (true, true) => SymbolPosition::None,
        }
    }

    fn to_spec(&self) -> SymbolSpec {
        let leading: Vec<char> = self.leading.chars().collect();
        let trailing: Vec<char> = self.trailing.chars().collect();
        SymbolSpec::from_parts(self.position(), &leading, &trailing)
    }
}

/// One integer-grouping rule.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingRule {
    pub chars: String,
    pub group_size: u32,
    /// 0 = unlimited.
    #[cfg_attr(feature = "serde", serde(default))]
    pub repetitions: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restart_sequence: bool,
}

impl GroupingRule {
    pub fn every(chars: &str, group_size: u32) -> Self {
        GroupingRule {
            chars: chars.to_owned(),
            group_size,
            repetitions: 0,
            restart_sequence: false,
        }
    }

    fn to_spec(&self) -> IntegerGroupingSpec {
        let chars: Vec<char> = self.chars.chars().collect();
        IntegerGroupingSpec::from_parts(
            &chars,
            self.group_size,
            self.repetitions,
            self.restart_sequence,
        )
    }
}

/// Symbol conventions used by one locale.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocaleProfile {
    pub name: String,
    /// Tried in order; the first matching convention wins.
    pub negative_signs: Vec<SignConvention>,
    pub decimal_separator: String,
    pub integer_grouping: Vec<GroupingRule>,
}

/// Validated specs built from a [`LocaleProfile`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberSymbols {
    pub signs: SpecCollection,
    pub decimal: DecimalSeparatorSpec,
    pub grouping: IntegerGroupingSequence,
}

impl NumberSymbols {
    /// Clear all scan state for a fresh parse.
    pub fn reset_processing_state(&mut self) {
        self.signs.reset_processing_state();
        self.decimal.reset_processing_state();
    }
}

impl LocaleProfile {
    /// `-1,234.56` or `(1,234.56)`.
    pub fn united_states() -> Self {
        LocaleProfile {
            name: "United States".to_owned(),
            negative_signs: vec![
                SignConvention::leading("-"),
                SignConvention::paired("(", ")"),
            ],
            decimal_separator: ".".to_owned(),
            integer_grouping: vec![GroupingRule::every(",", 3)],
        }
    }

    /// `-1.234,56` or `1.234,56-`.
    pub fn germany() -> Self {
        LocaleProfile {
            name: "Germany".to_owned(),
            negative_signs: vec![SignConvention::leading("-"), SignConvention::trailing("-")],
            decimal_separator: ",".to_owned(),
            integer_grouping: vec![GroupingRule::every(".", 3)],
        }
    }

    /// `-1 234,56`.
    pub fn france() -> Self {
        LocaleProfile {
            name: "France".to_owned(),
            negative_signs: vec![SignConvention::leading("-")],
            decimal_separator: ",".to_owned(),
            integer_grouping: vec![GroupingRule::every(" ", 3)],
        }
    }

    /// `-1.234,56`.
    pub fn european_union() -> Self {
        LocaleProfile {
            name: "European Union".to_owned(),
            negative_signs: vec![SignConvention::leading("-")],
            decimal_separator: ",".to_owned(),
            integer_grouping: vec![GroupingRule::every(".", 3)],
        }
    }

    /// `-12,34,567.89`.
    pub fn india() -> Self {
        LocaleProfile {
            name: "India".to_owned(),
            negative_signs: vec![SignConvention::leading("-")],
            decimal_separator: ".".to_owned(),
            integer_grouping: vec![
                GroupingRule {
                    chars: ",".to_owned(),
                    group_size: 3,
                    repetitions: 1,
                    restart_sequence: false,
                },
                GroupingRule::every(",", 2),
            ],
        }
    }

    /// `-1,2345,6789.01`.
    pub fn china() -> Self {
        LocaleProfile {
            name: "China".to_owned(),
            negative_signs: vec![SignConvention::leading("-")],
            decimal_separator: ".".to_owned(),
            integer_grouping: vec![GroupingRule::every(",", 4)],
        }
    }

    /// Validate every part and assemble the scan specs.
    ///
    /// Errors carry the profile name and the section that failed; sign and
    /// grouping errors also carry the offending entry's index.
    pub fn build(&self) -> Result<NumberSymbols> {
        let label = format!("locale profile {:?}", self.name);

        let mut signs = SpecCollection::new();
        for (index, convention) in self.negative_signs.iter().enumerate() {
            signs
                .add(convention.to_spec())
                .map_err(|err| err.at_member(index))
                .context("negative_signs")
                .context(label.clone())?;
        }
        signs.validate().context("negative_signs").context(label.clone())?;

        let decimal = DecimalSeparatorSpec::from_text(&self.decimal_separator)
            .context("decimal_separator")
            .context(label.clone())?;

        let grouping = IntegerGroupingSequence::from_rules(
            self.integer_grouping.iter().map(GroupingRule::to_spec).collect(),
        )
        .context("integer_grouping")
        .context(label)?;

        debug!(profile = %self.name, signs = signs.len(), "locale profile built");
        Ok(NumberSymbols {
            signs,
            decimal,
            grouping,
        })
    }
}
