#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use gitfx_cli::identity::{self, EMAIL_KEY, NAME_KEY};
    use gitfx_cli::prompt::Prompter;
    use gitfx_core::error::{Error, Result};
    use gitfx_core::git::ConfigSink;
    use gitfx_core::scope::Scope;

    /// Prompter fed from a fixed script, counting value prompts so
    /// tests can assert that no prompting happened at all.
    struct ScriptedPrompter {
        scope: Option<Scope>,
        answers: VecDeque<String>,
        value_prompts: usize,
    }

    impl ScriptedPrompter {
        fn new(scope: Option<Scope>, answers: &[&str]) -> Self {
            Self {
                scope,
                answers: answers.iter().map(ToString::to_string).collect(),
                value_prompts: 0,
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select_scope(&mut self) -> Result<Option<Scope>> {
            Ok(self.scope)
        }

        fn prompt_value(&mut self, _label: &str, _default: &str) -> Result<String> {
            self.value_prompts += 1;
            Ok(self
                .answers
                .pop_front()
                .expect("prompted more times than scripted"))
        }
    }

    /// Config sink recording every invocation, optionally failing on
    /// chosen keys.
    struct RecordingGit {
        inside_work_tree: bool,
        failing_keys: Vec<&'static str>,
        calls: RefCell<Vec<(Scope, String, String)>>,
    }

    impl RecordingGit {
        fn new(inside_work_tree: bool) -> Self {
            Self {
                inside_work_tree,
                failing_keys: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing_on(mut self, key: &'static str) -> Self {
            self.failing_keys.push(key);
            self
        }

        fn calls(&self) -> Vec<(Scope, String, String)> {
            self.calls.borrow().clone()
        }
    }

    impl ConfigSink for RecordingGit {
        fn inside_work_tree(&self) -> bool {
            self.inside_work_tree
        }

        fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((scope, key.to_string(), value.to_string()));

            if self.failing_keys.contains(&key) {
                return Err(Error::GitExit {
                    args: format!("config {} {key} {value}", scope.flag()),
                    code: 1,
                    stderr: "error: could not lock config file".to_string(),
                });
            }

            Ok(())
        }
    }

    #[test]
    fn test_global_scope_name_only_applies_one_setting() {
        let git = RecordingGit::new(false);
        let mut prompter = ScriptedPrompter::new(Some(Scope::Global), &["Ada Lovelace", ""]);

        identity::run(&git, &mut prompter).unwrap();

        let calls = git.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (
                Scope::Global,
                NAME_KEY.to_string(),
                "Ada Lovelace".to_string()
            )
        );
    }

    #[test]
    fn test_system_scope_email_only_applies_one_setting() {
        let git = RecordingGit::new(false);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::System), &["", "bob@example.com"]);

        identity::run(&git, &mut prompter).unwrap();

        let calls = git.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (
                Scope::System,
                EMAIL_KEY.to_string(),
                "bob@example.com".to_string()
            )
        );
    }

    #[test]
    fn test_local_scope_outside_repo_never_prompts_or_applies() {
        let git = RecordingGit::new(false);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::Local), &["should-not-be-read", "nor-this"]);

        identity::run(&git, &mut prompter).unwrap();

        assert_eq!(prompter.value_prompts, 0);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_local_scope_inside_repo_proceeds_to_apply() {
        let git = RecordingGit::new(true);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::Local), &["Grace Hopper", "grace@example.com"]);

        identity::run(&git, &mut prompter).unwrap();

        let calls = git.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(scope, _, _)| *scope == Scope::Local));
    }

    #[test]
    fn test_both_values_empty_means_zero_invocations() {
        let git = RecordingGit::new(false);
        let mut prompter = ScriptedPrompter::new(Some(Scope::Global), &["", ""]);

        identity::run(&git, &mut prompter).unwrap();

        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_whitespace_only_values_are_skipped() {
        let git = RecordingGit::new(false);
        let mut prompter = ScriptedPrompter::new(Some(Scope::Global), &["   ", "\t "]);

        identity::run(&git, &mut prompter).unwrap();

        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_cancelled_scope_selection_is_a_clean_exit() {
        let git = RecordingGit::new(true);
        let mut prompter = ScriptedPrompter::new(None, &[]);

        let result = identity::run(&git, &mut prompter);

        assert!(result.is_ok());
        assert_eq!(prompter.value_prompts, 0);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_name_failure_does_not_block_email() {
        let git = RecordingGit::new(false).failing_on(NAME_KEY);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::Global), &["Ada", "ada@example.com"]);

        identity::run(&git, &mut prompter).unwrap();

        let calls = git.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].1, EMAIL_KEY);
    }

    #[test]
    fn test_email_failure_does_not_block_name() {
        let git = RecordingGit::new(false).failing_on(EMAIL_KEY);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::Global), &["Ada", "ada@example.com"]);

        identity::run(&git, &mut prompter).unwrap();

        let calls = git.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, NAME_KEY);
    }

    #[test]
    fn test_flow_returns_ok_even_when_every_field_fails() {
        let git = RecordingGit::new(false)
            .failing_on(NAME_KEY)
            .failing_on(EMAIL_KEY);
        let mut prompter =
            ScriptedPrompter::new(Some(Scope::Global), &["Ada", "ada@example.com"]);

        assert!(identity::run(&git, &mut prompter).is_ok());
    }
}
