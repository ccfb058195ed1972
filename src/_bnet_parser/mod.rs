use crate::_expression_parser::FnUpdateTemp;
use crate::BooleanNetwork;
use std::collections::HashMap;
use std::convert::TryFrom;

impl BooleanNetwork {
    /// Try to load a Boolean network from a `.bnet` model.
    ///
    /// Each non-comment line has the form `target, function`. The `targets, factors` header
    /// is optional. Variables which only appear inside functions become constant inputs.
    pub fn try_from_bnet(model_string: &str) -> Result<BooleanNetwork, String> {
        let mut model_map: HashMap<String, FnUpdateTemp> = HashMap::new();
        for line in model_string.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() || line.starts_with("targets,") {
                continue; // Skip comments, empty lines and header.
            }

            let segments = line.split(',').collect::<Vec<_>>();
            if segments.len() != 2 {
                return Err(format!("Unexpected line: `{}`", line));
            }

            let variable_name = segments[0].trim().to_string();
            if model_map.contains_key(&variable_name) {
                return Err(format!(
                    "Duplicate function declaration for `{}`.",
                    variable_name
                ));
            }

            let function_template = FnUpdateTemp::try_from(segments[1].trim())?;
            model_map.insert(variable_name, function_template);
        }

        BooleanNetwork::from_templates(model_map)
    }
}
