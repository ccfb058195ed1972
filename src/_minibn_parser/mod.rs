use crate::_expression_parser::FnUpdateTemp;
use crate::BooleanNetwork;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::convert::TryFrom;

lazy_static! {
    /// Matches one `target <- function` line of a `minibn` model.
    static ref MINIBN_LINE: Regex =
        Regex::new(r"^(?P<name>[^\s<]+)\s*<-\s*(?P<function>.+)$").unwrap();
}

impl BooleanNetwork {
    /// Try to load a Boolean network from a `minibn` model, i.e. a list of `target <- function`
    /// lines with `#` comments.
    ///
    /// As with `.bnet`, variables which only appear inside functions become constant inputs.
    pub fn try_from_minibn(model_string: &str) -> Result<BooleanNetwork, String> {
        let mut model_map: HashMap<String, FnUpdateTemp> = HashMap::new();
        for line in model_string.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let captures = MINIBN_LINE
                .captures(line)
                .ok_or_else(|| format!("Unexpected line: `{}`", line))?;
            let name = captures["name"].to_string();
            if model_map.contains_key(&name) {
                return Err(format!("Duplicate function declaration for `{}`.", name));
            }
            let function = FnUpdateTemp::try_from(&captures["function"])?;
            model_map.insert(name, function);
        }

        BooleanNetwork::from_templates(model_map)
    }
}

#[cfg(test)]
mod tests {
    use crate::BooleanNetwork;

    #[test]
    fn read_minibn() {
        let network = BooleanNetwork::try_from_minibn(
            r"
            # A toy toggle switch with an input.
            a <- !b & s
            b <- ~a
        ",
        )
        .unwrap();
        assert_eq!(3, network.num_vars());
        let a = network.find_variable("a").unwrap();
        let b = network.find_variable("b").unwrap();
        let s = network.find_variable("s").unwrap();
        assert_eq!("(!b & s)", network.get_update_function(a).to_string(&network));
        assert_eq!("!a", network.get_update_function(b).to_string(&network));
        assert_eq!("s", network.get_update_function(s).to_string(&network));
    }

    #[test]
    fn read_minibn_invalid() {
        assert!(BooleanNetwork::try_from_minibn("a = b").is_err());
        assert!(BooleanNetwork::try_from_minibn("a <- b\na <- c").is_err());
        assert!(BooleanNetwork::try_from_minibn("a <- b & (c").is_err());
    }
}
