use crate::_expression_parser::FnUpdateTemp;
use crate::{BooleanNetwork, FnUpdate, Variable, VariableId, VariableIdIterator};
use fxhash::FxHashMap;
use std::collections::{HashMap, HashSet};
use std::ops::Index;

/// Basic methods for safely building `BooleanNetwork`s.
impl BooleanNetwork {
    /// Construct a new `BooleanNetwork` with the given variable names.
    ///
    /// Every variable starts with the identity update function (`x' = x`), i.e. as
    /// a constant input. Names must be non-empty and unique.
    pub fn new(variables: Vec<String>) -> Result<BooleanNetwork, String> {
        let mut network = BooleanNetwork {
            variables: Vec::with_capacity(variables.len()),
            update_functions: Vec::with_capacity(variables.len()),
            variable_to_index: FxHashMap::default(),
        };
        for name in variables {
            network.add_variable(name.as_str())?;
        }
        Ok(network)
    }

    /// Add a new variable to this network. The variable is initially a constant input.
    pub fn add_variable(&mut self, name: &str) -> Result<VariableId, String> {
        if name.trim().is_empty() {
            return Err("Variable name cannot be empty.".to_string());
        }
        if self.variable_to_index.contains_key(name) {
            return Err(format!("Variable `{}` declared more than once.", name));
        }
        let id = VariableId(self.variables.len());
        self.variables.push(Variable {
            name: name.to_string(),
        });
        self.update_functions.push(FnUpdate::Var(id));
        self.variable_to_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Replace the update function of the given `variable`.
    ///
    /// The function can only reference variables of this network.
    pub fn set_update_function(
        &mut self,
        variable: VariableId,
        function: FnUpdate,
    ) -> Result<(), String> {
        self.assert_valid_variable(variable)?;
        for argument in function.collect_arguments() {
            self.assert_valid_variable(argument)?;
        }
        self.update_functions[variable.0] = function;
        Ok(())
    }

    /// Parse `function` as a Boolean expression over the variables of this network and
    /// use it as the update function of the variable called `variable`.
    pub fn add_string_update_function(
        &mut self,
        variable: &str,
        function: &str,
    ) -> Result<(), String> {
        let id = self.find_variable(variable).ok_or_else(|| {
            format!(
                "Cannot set update function. Unknown variable `{}`.",
                variable
            )
        })?;
        let function = FnUpdate::try_from_str(function, self)?;
        self.set_update_function(id, function)
    }

    /// **(internal)** Build a network from parsed function templates.
    ///
    /// The variables are every function target plus every name referenced in some function,
    /// sorted by name. Variables with no template remain constant inputs.
    pub(crate) fn from_templates(
        templates: HashMap<String, FnUpdateTemp>,
    ) -> Result<BooleanNetwork, String> {
        let mut names = HashSet::new();
        for (name, template) in &templates {
            names.insert(name.clone());
            template.dump_variables(&mut names);
        }
        let mut names = names.into_iter().collect::<Vec<_>>();
        names.sort();

        let mut network = BooleanNetwork::new(names)?;
        for (name, template) in templates {
            let id = network.find_variable(name.as_str()).ok_or_else(|| {
                format!("Variable `{}` disappeared from the network.", name)
            })?;
            let function = template.into_fn_update(&network)?;
            network.set_update_function(id, *function)?;
        }
        Ok(network)
    }

    /// **(internal)** Utility method to ensure that a variable id belongs to this network.
    fn assert_valid_variable(&self, variable: VariableId) -> Result<(), String> {
        if variable.0 < self.variables.len() {
            Ok(())
        } else {
            Err(format!(
                "Invalid variable {}. Network only has {} variables.",
                variable,
                self.variables.len()
            ))
        }
    }
}

/// Some basic utility methods for inspecting the `BooleanNetwork`.
impl BooleanNetwork {
    /// The number of variables in this network.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Return an iterator over all variable ids of this network (in the order of insertion).
    pub fn variables(&self) -> VariableIdIterator {
        (0..self.variables.len()).map(VariableId)
    }

    /// Return all variable ids of this network ordered lexicographically by their names.
    ///
    /// This is the order in which the network is exported, so the output does not depend on
    /// the order in which the variables were created.
    pub fn variables_by_name(&self) -> Vec<VariableId> {
        let mut result = self.variables().collect::<Vec<_>>();
        result.sort_by(|a, b| self[*a].name.cmp(&self[*b].name));
        result
    }

    /// Find a `VariableId` for the given name, or `None` if the variable does not exist.
    pub fn find_variable(&self, name: &str) -> Option<VariableId> {
        self.variable_to_index.get(name).cloned()
    }

    /// Return a variable object for the given id.
    pub fn get_variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.0]
    }

    /// Shorthand for `self.get_variable(id).get_name()`.
    pub fn get_variable_name(&self, id: VariableId) -> &String {
        &self.variables[id.0].name
    }

    /// Get the update function of the given variable.
    pub fn get_update_function(&self, id: VariableId) -> &FnUpdate {
        &self.update_functions[id.0]
    }

    /// Iterate over `(name, update function)` pairs ordered by variable name.
    pub fn sorted_update_functions(&self) -> impl Iterator<Item = (&String, &FnUpdate)> + '_ {
        self.variables_by_name()
            .into_iter()
            .map(move |id| (self.get_variable_name(id), self.get_update_function(id)))
    }
}

impl Index<VariableId> for BooleanNetwork {
    type Output = Variable;

    fn index(&self, index: VariableId) -> &Self::Output {
        &self.variables[index.0]
    }
}
