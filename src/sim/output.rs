use std::fmt;

use serde::Serialize;

use crate::core::Balance;

/// Result of one executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Flag(bool),
    Balance(Balance),
    Names(Vec<String>)
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Balance(balance) => write!(f, "{}", balance),
            Self::Names(names) => write!(f, "[{}]", names.join(", "))
        }
    }
}

impl From<bool> for Output {
    fn from(flag: bool) -> Self {
        Output::Flag(flag)
    }
}

impl From<Balance> for Output {
    fn from(balance: Balance) -> Self {
        Output::Balance(balance)
    }
}

impl From<Vec<String>> for Output {
    fn from(names: Vec<String>) -> Self {
        Output::Names(names)
    }
}

#[cfg(test)]
mod tests {
    use super::Output;

    use rstest::rstest;
    use serde_json::json;

    fn names(list: &[&str]) -> Output {
        Output::Names(list.iter().map(|s| s.to_string()).collect())
    }

    #[rstest]
    #[case(Output::Flag(true), "true")]
    #[case(Output::Flag(false), "false")]
    #[case(Output::Balance(-1), "-1")]
    #[case(Output::Balance(300), "300")]
    #[case(names(&[]), "[]")]
    #[case(names(&["Alice"]), "[Alice]")]
    #[case(names(&["Kim", "Quyen", "Tammy"]), "[Kim, Quyen, Tammy]")]
    fn text_form(#[case] output: Output, #[case] expected: &str) {
        assert_eq!(output.to_string(), expected);
    }

    #[test]
    fn json_form() {
        let outputs = vec![Output::Flag(true), Output::Balance(300), names(&["Kim", "Tammy"])];
        assert_eq!(serde_json::to_value(&outputs).unwrap(), json!([true, 300, ["Kim", "Tammy"]]));
    }
}
