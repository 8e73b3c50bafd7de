use serde::Deserialize;

/// Raw scheduler directives, emitted verbatim and in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SchedulerOptions(Vec<String>);

impl SchedulerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, directive: S) {
        self.0.push(directive.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SchedulerOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for SchedulerOptions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into))
    }
}

/// Commands and script conventions of the target scheduler. Defaults to SLURM.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    pub submit_command: String,
    pub interactive_command: String,
    pub directive_prefix: String,
    pub shell: String,
    pub shebang: String,
    pub activate_command: String,
    pub deactivate_command: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            submit_command: "sbatch".to_string(),
            interactive_command: "srun".to_string(),
            directive_prefix: "#SBATCH".to_string(),
            shell: "bash".to_string(),
            shebang: "#!/bin/bash".to_string(),
            activate_command: "source activate".to_string(),
            deactivate_command: "source deactivate".to_string(),
        }
    }
}
