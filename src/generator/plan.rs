use crate::error::{Error, Result};
use crate::manifest::Manifest;
use indexmap::IndexMap;
use log::debug;

/// Steps of a manifest selected to run, resolved before any side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    selected: Vec<bool>,
}

impl ExecutionPlan {
    /// Resolves `optional_steps` against the steps declared in `manifest`.
    ///
    /// Required steps always run. An optional step runs when its name is
    /// listed; a name shared by several steps activates all of them.
    ///
    /// # Returns
    /// * `Result<Self>` - The plan, or `Error::ConfigError` naming every unknown step
    pub fn resolve<S: AsRef<str>>(manifest: &Manifest, optional_steps: &[S]) -> Result<Self> {
        let mut by_name: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (i, step) in manifest.steps.iter().enumerate() {
            by_name.entry(step.name.as_str()).or_default().push(i);
        }

        let mut selected: Vec<bool> = manifest.steps.iter().map(|step| !step.optional).collect();
        let mut unknown: Vec<&str> = Vec::new();

        for name in optional_steps {
            let name: &str = name.as_ref();
            match by_name.get(name) {
                Some(indices) => indices.iter().for_each(|&i| selected[i] = true),
                None if !unknown.contains(&name) => unknown.push(name),
                None => {}
            }
        }

        if !unknown.is_empty() {
            let names: Vec<String> = unknown.iter().map(|name| format!("'{name}'")).collect();
            return Err(Error::ConfigError(format!(
                "unknown optional steps: {}",
                names.join(", ")
            )));
        }

        debug!(
            "Execution plan: {} of {} steps selected",
            selected.iter().filter(|&&s| s).count(),
            selected.len()
        );
        Ok(Self { selected })
    }

    pub fn should_run(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
