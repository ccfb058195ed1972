use crate::pint::{
    pint_protect, AnWriteError, ExportError, LocalTransition, ModelLoader, OutputFiles,
    TransitionWriter,
};
use crate::symbolic::SymbolicContext;
use crate::{BooleanNetwork, FnUpdate, VariableId};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Compute the simplified `(up, down)` guards of the given `variable`.
///
/// With `fa` the update function of `variable`, the up guard is `fa[variable := false]` and
/// the down guard is `(!fa)[variable := true]`. The up guard is the condition under which
/// the variable can change from `0` to `1`, the down guard is the condition for `1 -> 0`.
pub fn transition_guards(
    network: &BooleanNetwork,
    context: &SymbolicContext,
    variable: VariableId,
) -> (FnUpdate, FnUpdate) {
    let function = network.get_update_function(variable);
    let up = function.restrict(variable, false).simplify(context);
    let down = function
        .clone()
        .negation()
        .restrict(variable, true)
        .simplify(context);
    (up, down)
}

/// Write the `.an` representation of `network` into `out`, escaping names using `protect`.
///
/// First, all variables are declared, then the up and down transitions of each variable
/// follow. Both parts are ordered by variable name, so the output only depends on the
/// network itself.
pub fn write_automata_network<P, W>(
    network: &BooleanNetwork,
    protect: &P,
    out: W,
) -> Result<(), AnWriteError>
where
    P: Fn(&str) -> String + ?Sized,
    W: Write,
{
    let context = SymbolicContext::new(network)?;
    let variables = network.variables_by_name();
    let mut writer = TransitionWriter::new(network, protect, out);

    for variable in &variables {
        writer.declare_variable(*variable)?;
    }

    for variable in variables {
        let (up, down) = transition_guards(network, &context, variable);
        debug!(
            "Variable `{}`: up when {}, down when {}.",
            network.get_variable_name(variable),
            up.to_string(network),
            down.to_string(network)
        );
        writer.make_transitions(&[LocalTransition::up(variable)], &up)?;
        writer.make_transitions(&[LocalTransition::down(variable)], &down)?;
    }

    writer.finish()?;
    Ok(())
}

/// Produce the `.an` representation of `network` as a string, escaping names using
/// [pint_protect].
pub fn to_automata_network_string(network: &BooleanNetwork) -> Result<String, AnWriteError> {
    let mut buffer = Vec::new();
    write_automata_network(network, &pint_protect, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| AnWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Export `network` into a new `.an` file allocated by `files` and load it using `loader`.
///
/// The file is closed before `loader` is invoked and is never deleted. The result of the
/// loader is returned as is.
pub fn import_boolean_network<F, P, L>(
    network: &BooleanNetwork,
    files: &mut F,
    protect: &P,
    loader: &L,
) -> Result<L::Model, ExportError<L::Error>>
where
    F: OutputFiles + ?Sized,
    P: Fn(&str) -> String + ?Sized,
    L: ModelLoader + ?Sized,
{
    let path = files.new_output_file("an")?;
    {
        let file = File::create(&path)?;
        write_automata_network(network, protect, BufWriter::new(file))?;
    }
    info!(
        "Automata network with {} automata written to {}.",
        network.num_vars(),
        path.display()
    );
    loader.load(&path).map_err(ExportError::Load)
}

#[cfg(test)]
mod tests {
    use crate::pint::{
        import_boolean_network, pint_protect, to_automata_network_string, transition_guards,
        write_automata_network, AnWriteError, ExportError, OutputFiles, SessionFiles,
    };
    use crate::symbolic::SymbolicContext;
    use crate::{BooleanNetwork, FnUpdate};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use test_log::test;

    fn read_file(path: &Path) -> Result<String, io::Error> {
        fs::read_to_string(path)
    }

    #[test]
    fn declarations_are_sorted() {
        let bn = BooleanNetwork::try_from_minibn("B <- A\nA <- B").unwrap();
        let text = to_automata_network_string(&bn).unwrap();
        let declarations = text
            .lines()
            .filter(|it| it.ends_with("[0, 1]"))
            .collect::<Vec<_>>();
        assert_eq!(vec!["A [0, 1]", "B [0, 1]"], declarations);
        let expected = r"A [0, 1]
B [0, 1]
A 0 -> 1 when B=1
A 1 -> 0 when B=0
B 0 -> 1 when A=1
B 1 -> 0 when A=0
";
        assert_eq!(expected, text);
    }

    #[test]
    fn constant_true_always_turns_on() {
        let mut bn = BooleanNetwork::new(vec!["a".to_string()]).unwrap();
        bn.add_string_update_function("a", "true").unwrap();
        let ctx = SymbolicContext::new(&bn).unwrap();
        let a = bn.find_variable("a").unwrap();
        let (up, down) = transition_guards(&bn, &ctx, a);
        assert_eq!(FnUpdate::mk_true(), up);
        assert_eq!(FnUpdate::mk_false(), down);
        assert_eq!(
            "a [0, 1]\na 0 -> 1\n",
            to_automata_network_string(&bn).unwrap()
        );
    }

    #[test]
    fn identity_never_changes() {
        let bn = BooleanNetwork::new(vec!["a".to_string()]).unwrap();
        let ctx = SymbolicContext::new(&bn).unwrap();
        let a = bn.find_variable("a").unwrap();
        let (up, down) = transition_guards(&bn, &ctx, a);
        assert_eq!(FnUpdate::mk_false(), up);
        assert_eq!(FnUpdate::mk_false(), down);
        assert_eq!("a [0, 1]\n", to_automata_network_string(&bn).unwrap());
    }

    #[test]
    fn self_dependent_guards() {
        // a' = a | b: a can turn on when b, but never turns off.
        let bn = BooleanNetwork::try_from_minibn("a <- a | b\nb <- !a").unwrap();
        let ctx = SymbolicContext::new(&bn).unwrap();
        let a = bn.find_variable("a").unwrap();
        let b = bn.find_variable("b").unwrap();
        let (up, down) = transition_guards(&bn, &ctx, a);
        assert_eq!(FnUpdate::mk_var(b), up);
        assert_eq!(FnUpdate::mk_false(), down);
        let (up, down) = transition_guards(&bn, &ctx, b);
        assert_eq!(FnUpdate::mk_var(a).negation(), up);
        assert_eq!(FnUpdate::mk_var(a), down);
    }

    #[test]
    fn multiple_clauses() {
        let bn = BooleanNetwork::try_from_minibn("t <- x | y").unwrap();
        let text = to_automata_network_string(&bn).unwrap();
        let mut transitions = text
            .lines()
            .filter(|it| it.starts_with("t 0 -> 1"))
            .collect::<Vec<_>>();
        transitions.sort();
        assert_eq!(
            vec!["t 0 -> 1 when x=0 and y=1", "t 0 -> 1 when x=1"],
            transitions
        );
        assert!(text.contains("t 1 -> 0 when x=0 and y=0\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let model = r"
            p53.active <- !Mdm2 & DNA
            Mdm2 <- p53.active | (Mdm2 & !DNA)
            DNA <- DNA & !p53.active
        ";
        let first = BooleanNetwork::try_from_minibn(model).unwrap();
        let second = BooleanNetwork::try_from_minibn(model).unwrap();

        let directory = std::env::temp_dir().join("bn-to-an-test-deterministic");
        let _ = fs::remove_dir_all(&directory);
        let mut files = SessionFiles::new(&directory);
        let a = import_boolean_network(&first, &mut files, &pint_protect, &read_file).unwrap();
        let b = import_boolean_network(&second, &mut files, &pint_protect, &read_file).unwrap();
        assert_eq!(a, b);
        assert_eq!(to_automata_network_string(&first).unwrap(), a);
        let _ = fs::remove_dir_all(&directory);
    }

    #[test]
    fn protected_names_are_consistent() {
        let bn = BooleanNetwork::try_from_minibn("p53.active <- !p53.active | Mdm2").unwrap();
        let text = to_automata_network_string(&bn).unwrap();
        let expected = r#"Mdm2 [0, 1]
"p53.active" [0, 1]
"p53.active" 0 -> 1
"p53.active" 1 -> 0 when Mdm2=0
"#;
        assert_eq!(expected, text);
        for line in text.lines() {
            assert!(!line.contains("p53.active") || line.contains("\"p53.active\""));
        }
    }

    #[test]
    fn names_with_operator_characters() {
        let bn = BooleanNetwork::try_from_minibn("a <- b\nb!c <- a").unwrap();
        let expected = r#"a [0, 1]
b [0, 1]
"b!c" [0, 1]
a 0 -> 1 when b=1
a 1 -> 0 when b=0
"b!c" 0 -> 1 when a=1
"b!c" 1 -> 0 when a=0
"#;
        assert_eq!(expected, to_automata_network_string(&bn).unwrap());

        let mut bn = BooleanNetwork::new(vec!["x=y".to_string(), "a:b".to_string()]).unwrap();
        let x = bn.find_variable("x=y").unwrap();
        let a = bn.find_variable("a:b").unwrap();
        bn.set_update_function(x, FnUpdate::mk_var(a).negation())
            .unwrap();
        let expected = r#""a:b" [0, 1]
"x=y" [0, 1]
"x=y" 0 -> 1 when "a:b"=0
"x=y" 1 -> 0 when "a:b"=1
"#;
        assert_eq!(expected, to_automata_network_string(&bn).unwrap());
    }

    #[test]
    fn custom_protection_is_used_everywhere() {
        let bn = BooleanNetwork::try_from_minibn("a <- !b\nb <- a").unwrap();
        let protect = |name: &str| format!("<{}>", name);
        let mut buffer = Vec::new();
        write_automata_network(&bn, &protect, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("<a> [0, 1]\n"));
        assert!(text.contains("<a> 0 -> 1 when <b>=0\n"));
        assert!(text.contains("<b> 1 -> 0 when <a>=0\n"));
    }

    struct BrokenFiles;

    impl OutputFiles for BrokenFiles {
        fn new_output_file(&mut self, _extension: &str) -> io::Result<PathBuf> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "no session"))
        }
    }

    #[test]
    fn errors_are_propagated() {
        let bn = BooleanNetwork::try_from_minibn("a <- !a").unwrap();
        let result = import_boolean_network(&bn, &mut BrokenFiles, &pint_protect, &read_file);
        match result {
            Err(ExportError::Write(AnWriteError::Io(e))) => {
                assert_eq!(io::ErrorKind::PermissionDenied, e.kind())
            }
            _ => panic!("Expected an I/O error."),
        }

        let directory = std::env::temp_dir().join("bn-to-an-test-loader-error");
        let _ = fs::remove_dir_all(&directory);
        let mut files = SessionFiles::new(&directory);
        let reject = |path: &Path| -> Result<(), String> {
            Err(format!("Cannot parse {}.", path.display()))
        };
        let result = import_boolean_network(&bn, &mut files, &pint_protect, &reject);
        match result {
            Err(ExportError::Load(message)) => assert!(message.starts_with("Cannot parse")),
            _ => panic!("Expected a loader error."),
        }
        // The file is written (and kept) even when loading fails.
        let written = fs::read_to_string(directory.join("output-1.an")).unwrap();
        assert_eq!("a [0, 1]\na 0 -> 1\na 1 -> 0\n", written);
        let _ = fs::remove_dir_all(&directory);
    }
}
