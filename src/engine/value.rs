use std::fmt;

use crate::error::AssignError;

/// State of one variable. Wire encoding is `-1 / 0 / 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VarValue {
    False,
    #[default]
    Unassigned,
    True,
}

impl VarValue {
    pub fn from_bool(b: bool) -> Self {
        if b { Self::True } else { Self::False }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::False => Some(false),
            Self::Unassigned => None,
            Self::True => Some(true),
        }
    }

    pub fn is_assigned(self) -> bool {
        self != Self::Unassigned
    }

    pub fn as_int(self) -> i8 {
        match self {
            Self::False => -1,
            Self::Unassigned => 0,
            Self::True => 1,
        }
    }
}

impl TryFrom<i64> for VarValue {
    type Error = AssignError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            -1 => Ok(Self::False),
            0 => Ok(Self::Unassigned),
            1 => Ok(Self::True),
            _ => Err(AssignError::InvalidValue(v)),
        }
    }
}

/// Three-valued truth of the whole formula under the current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaValue {
    /// Some clause has every literal false.
    Falsified,
    Undetermined,
    /// Every clause has a true literal.
    Satisfied,
}

impl FormulaValue {
    pub fn as_int(self) -> i8 {
        match self {
            Self::Falsified => -1,
            Self::Undetermined => 0,
            Self::Satisfied => 1,
        }
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Falsified => "falsified",
            Self::Undetermined => "undetermined",
            Self::Satisfied => "satisfied",
        };
        write!(f, "{} ({})", s, self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::{FormulaValue, VarValue};
    use crate::error::AssignError;

    #[test]
    fn wire_ints_map_both_ways() {
        for v in [-1i64, 0, 1] {
            let parsed = VarValue::try_from(v).expect("valid wire value");
            assert_eq!(i64::from(parsed.as_int()), v);
        }
        assert_eq!(VarValue::try_from(2), Err(AssignError::InvalidValue(2)));
        assert_eq!(VarValue::try_from(-7), Err(AssignError::InvalidValue(-7)));
    }

    #[test]
    fn default_is_unassigned() {
        assert_eq!(VarValue::default(), VarValue::Unassigned);
        assert!(!VarValue::default().is_assigned());
        assert_eq!(VarValue::from_bool(false).as_bool(), Some(false));
    }

    #[test]
    fn formula_value_display_carries_wire_int() {
        assert_eq!(FormulaValue::Falsified.to_string(), "falsified (-1)");
        assert_eq!(FormulaValue::Satisfied.as_int(), 1);
    }
}
