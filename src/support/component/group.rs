use std::collections::BTreeSet;

use log::debug;

use crate::support::variables::{VariableSpec, Variables};

use super::{Component, ComponentError};

/// Convergence settings for [`Group::run_coupled`].
#[derive(Debug, Clone, Copy)]
pub struct CoupledConfig {
    /// Maximum number of passes through the group.
    pub max_iters: usize,

    /// Relative change below which a watched variable is considered settled.
    pub rel_tol: f64,
}

impl Default for CoupledConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            rel_tol: 1e-6,
        }
    }
}

struct Member {
    name: String,
    component: Box<dyn Component>,
}

/// An ordered sequence of components sharing one variable store.
///
/// Members run in insertion order. A member's inputs are read from the store,
/// which holds the caller's variables plus every output written by earlier
/// members; missing inputs fall back to their declared defaults.
///
/// A `Group` is itself a [`Component`], so groups nest.
#[derive(Default)]
pub struct Group {
    members: Vec<Member>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named member.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, component: impl Component + 'static) -> Self {
        self.add(name, component);
        self
    }

    /// Appends a named member.
    pub fn add(&mut self, name: impl Into<String>, component: impl Component + 'static) {
        self.members.push(Member {
            name: name.into(),
            component: Box::new(component),
        });
    }

    /// Names of the members, in execution order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.name.as_str())
    }

    /// Runs every member once, writing outputs into `store`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ComponentError`] raised by a member, a
    /// [`VariableError::Missing`](crate::support::variables::VariableError::Missing)
    /// if an input without default is absent, or
    /// [`ComponentError::MissingOutput`] if a member skips a declared output.
    pub fn run(&self, store: &mut Variables) -> Result<(), ComponentError> {
        for member in &self.members {
            debug!("running component {}", member.name);

            let outputs = member.component.evaluate(store)?;

            for spec in member.component.outputs() {
                if !outputs.contains(&spec.name) {
                    return Err(ComponentError::MissingOutput {
                        component: member.name.clone(),
                        name: spec.name,
                    });
                }
            }

            store.extend(outputs);
        }
        Ok(())
    }

    /// Runs the group repeatedly until the `watched` scalars settle.
    ///
    /// This is a nonlinear block Gauss-Seidel iteration for groups in which a
    /// downstream member overwrites a variable read upstream. Returns the
    /// number of passes performed.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::NotConverged`] if the watched variables still
    /// move by more than `config.rel_tol` after `config.max_iters` passes, or
    /// any error raised by [`run`](Self::run).
    pub fn run_coupled(
        &self,
        store: &mut Variables,
        watched: &[&str],
        config: CoupledConfig,
    ) -> Result<usize, ComponentError> {
        let mut residual = f64::INFINITY;

        for iter in 1..=config.max_iters {
            let before: Vec<Option<f64>> =
                watched.iter().map(|name| store.scalar(name).ok()).collect();

            self.run(store)?;

            residual = 0.0;
            for (name, previous) in watched.iter().zip(before) {
                let current = store.scalar(name)?;
                let change = match previous {
                    Some(previous) => (current - previous).abs() / previous.abs().max(1e-12),
                    None => f64::INFINITY,
                };
                residual = residual.max(change);
            }

            debug!("coupled pass {iter}: residual={residual:e}");

            if residual <= config.rel_tol {
                return Ok(iter);
            }
        }

        Err(ComponentError::NotConverged {
            iters: config.max_iters,
            residual,
        })
    }
}

impl Component for Group {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut produced = BTreeSet::new();
        let mut seen = BTreeSet::new();
        let mut inputs = Vec::new();

        for member in &self.members {
            for spec in member.component.inputs() {
                if !produced.contains(&spec.name) && seen.insert(spec.name.clone()) {
                    inputs.push(spec);
                }
            }
            produced.extend(member.component.outputs().into_iter().map(|spec| spec.name));
        }
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        let mut seen = BTreeSet::new();
        self.members
            .iter()
            .flat_map(|member| member.component.outputs())
            .filter(|spec| seen.insert(spec.name.clone()))
            .collect()
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mut store = inputs.clone();
        self.run(&mut store)?;

        let mut outputs = Variables::new();
        for spec in self.outputs() {
            let value = store.get(&spec.name)?.clone();
            outputs.insert(spec.name, value);
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::variables::VariableError;

    /// Writes `factor * input` to `output`.
    struct Scale {
        input: &'static str,
        output: &'static str,
        factor: f64,
    }

    impl Component for Scale {
        fn inputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new(self.input)]
        }

        fn outputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new(self.output)]
        }

        fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
            let x = inputs.scalar(self.input)?;
            Ok(Variables::new().with(self.output, self.factor * x))
        }
    }

    /// Averages its input with a constant target, a contraction toward `target`.
    struct Relax {
        name: &'static str,
        target: f64,
    }

    impl Component for Relax {
        fn inputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new(self.name).default_value(0.0)]
        }

        fn outputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new(self.name)]
        }

        fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
            let x = inputs.scalar(self.name)?;
            Ok(Variables::new().with(self.name, 0.5 * (x + self.target)))
        }
    }

    struct Forgetful;

    impl Component for Forgetful {
        fn inputs(&self) -> Vec<VariableSpec> {
            Vec::new()
        }

        fn outputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new("promised")]
        }

        fn compute(&self, _inputs: &Variables) -> Result<Variables, ComponentError> {
            Ok(Variables::new())
        }
    }

    fn chain() -> Group {
        Group::new()
            .with(
                "double",
                Scale {
                    input: "a",
                    output: "b",
                    factor: 2.0,
                },
            )
            .with(
                "triple",
                Scale {
                    input: "b",
                    output: "c",
                    factor: 3.0,
                },
            )
    }

    #[test]
    fn runs_members_in_order() {
        let mut store = Variables::new().with("a", 1.5);
        chain().run(&mut store).unwrap();

        assert_relative_eq!(store.scalar("b").unwrap(), 3.0);
        assert_relative_eq!(store.scalar("c").unwrap(), 9.0);
    }

    #[test]
    fn member_names_follow_insertion_order() {
        let group = chain();
        let names: Vec<_> = group.member_names().collect();
        assert_eq!(names, ["double", "triple"]);
    }

    #[test]
    fn evaluate_applies_defaults() {
        let relax = Relax {
            name: "x",
            target: 4.0,
        };

        let outputs = relax.evaluate(&Variables::new()).unwrap();
        assert_relative_eq!(outputs.scalar("x").unwrap(), 2.0);

        let err = relax.compute(&Variables::new()).unwrap_err();
        assert!(matches!(err, ComponentError::Variable(VariableError::Missing { .. })));
    }

    #[test]
    fn inputs_exclude_upstream_outputs() {
        let names: Vec<_> = chain().inputs().into_iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["a".to_string()]);

        let names: Vec<_> = chain().outputs().into_iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn missing_input_is_reported() {
        let mut store = Variables::new();
        let err = chain().run(&mut store).unwrap_err();

        assert!(matches!(
            err,
            ComponentError::Variable(VariableError::Missing { ref name }) if name == "a"
        ));
    }

    #[test]
    fn undeclared_output_is_reported() {
        let group = Group::new().with("forgetful", Forgetful);
        let err = group.run(&mut Variables::new()).unwrap_err();

        assert!(matches!(
            err,
            ComponentError::MissingOutput { ref component, ref name }
                if component == "forgetful" && name == "promised"
        ));
    }

    #[test]
    fn nested_groups_return_only_outputs() {
        let outer = Group::new().with("inner", chain());
        let outputs = outer.compute(&Variables::new().with("a", 1.0)).unwrap();

        assert!(!outputs.contains("a"));
        assert_relative_eq!(outputs.scalar("c").unwrap(), 6.0);
    }

    #[test]
    fn coupled_run_converges() {
        let group = Group::new().with(
            "relax",
            Relax {
                name: "x",
                target: 4.0,
            },
        );
        let mut store = Variables::new().with("x", 0.0);

        let iters = group
            .run_coupled(&mut store, &["x"], CoupledConfig::default())
            .unwrap();

        assert!(iters > 1);
        assert_relative_eq!(store.scalar("x").unwrap(), 4.0, max_relative = 1e-5);
    }

    #[test]
    fn coupled_run_reports_iteration_limit() {
        let group = Group::new().with(
            "relax",
            Relax {
                name: "x",
                target: 4.0,
            },
        );
        let mut store = Variables::new().with("x", 0.0);
        let config = CoupledConfig {
            max_iters: 3,
            rel_tol: 1e-12,
        };

        let err = group.run_coupled(&mut store, &["x"], config).unwrap_err();
        assert!(matches!(err, ComponentError::NotConverged { iters: 3, .. }));
    }
}
