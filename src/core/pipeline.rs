//! Sequenced validation: ordered checks followed by a terminal effect
//!
//! A [`Pipeline`] is a named list of checks run in strict order over a
//! request-scoped context. The first failing check halts the pipeline and its
//! error is returned; the effect only runs when every check passed.
//!
//! ```rust
//! use grubdash::core::error::{GrubError, GrubResult};
//! use grubdash::core::pipeline::Pipeline;
//!
//! fn positive(n: &mut i64) -> GrubResult<()> {
//!     if *n > 0 { Ok(()) } else { Err(GrubError::bad_request("must be positive")) }
//! }
//!
//! let pipeline = Pipeline::new("double").check("positive", positive);
//! assert_eq!(pipeline.run(&mut 21, |n| Ok(*n * 2)), Ok(42));
//! assert!(pipeline.run(&mut -1, |n| Ok(*n * 2)).is_err());
//! ```

use crate::core::entity::Record;
use crate::core::error::{GrubError, GrubResult};
use crate::core::store::Store;
use serde_json::Value;

/// A single step of a pipeline
pub type Check<C> = fn(&mut C) -> GrubResult<()>;

/// Ordered, short-circuiting list of checks
pub struct Pipeline<C> {
    name: &'static str,
    checks: Vec<(&'static str, Check<C>)>,
}

impl<C> Pipeline<C> {
    /// Create an empty pipeline
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Append a check; checks run in the order they are added
    pub fn check(mut self, name: &'static str, check: Check<C>) -> Self {
        self.checks.push((name, check));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the checks, in execution order
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|(name, _)| *name).collect()
    }

    /// Run every check, stopping at the first failure
    pub fn validate(&self, ctx: &mut C) -> GrubResult<()> {
        for (check_name, check) in &self.checks {
            if let Err(err) = check(ctx) {
                tracing::debug!(
                    pipeline = self.name,
                    check = *check_name,
                    status = err.status_code().as_u16(),
                    message = %err,
                    "check rejected request"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Run the checks, then `effect` if all of them passed
    pub fn run<R, F>(&self, ctx: &mut C, effect: F) -> GrubResult<R>
    where
        F: FnOnce(&mut C) -> GrubResult<R>,
    {
        self.validate(ctx)?;
        effect(ctx)
    }
}

/// Per-request scratch state shared by the checks and the effect
pub struct RequestContext<'a, T: Record> {
    /// Collection the request operates on
    pub store: &'a dyn Store<T>,
    /// Identifier taken from the request path, if the route has one
    pub route_id: Option<&'a str>,
    /// The `data` object of the request body
    pub data: &'a Value,
    /// Record attached by a lookup check
    pub record: Option<T>,
}

impl<'a, T: Record> RequestContext<'a, T> {
    pub fn new(store: &'a dyn Store<T>, data: &'a Value) -> Self {
        Self {
            store,
            route_id: None,
            data,
            record: None,
        }
    }

    pub fn with_route_id(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// A field of the `data` object
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data.get(name)
    }

    pub fn route_id(&self) -> &'a str {
        self.route_id.unwrap_or_default()
    }

    /// Look up the route identifier and attach the record
    ///
    /// On a miss, fails with `NotFound` and the message built by `missing`.
    pub fn locate<F>(&mut self, missing: F) -> GrubResult<()>
    where
        F: FnOnce(&str) -> String,
    {
        let id = self.route_id();
        match self.store.find(id) {
            Some(record) => {
                self.record = Some(record);
                Ok(())
            }
            None => Err(GrubError::not_found(missing(id))),
        }
    }

    /// The record attached by an earlier lookup check
    pub fn located(&self) -> GrubResult<&T> {
        self.record.as_ref().ok_or_else(|| {
            GrubError::not_found(format!(
                "No {} located for id: {}",
                T::resource_name(),
                self.route_id()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Trace {
        steps: Vec<&'static str>,
    }

    fn first(t: &mut Trace) -> GrubResult<()> {
        t.steps.push("first");
        Ok(())
    }

    fn second_fails(t: &mut Trace) -> GrubResult<()> {
        t.steps.push("second");
        Err(GrubError::bad_request("second failed"))
    }

    fn third(t: &mut Trace) -> GrubResult<()> {
        t.steps.push("third");
        Err(GrubError::bad_request("third failed"))
    }

    #[test]
    fn test_runs_checks_in_order_and_short_circuits() {
        let pipeline = Pipeline::new("trace")
            .check("first", first)
            .check("second", second_fails)
            .check("third", third);

        let mut trace = Trace::default();
        let result = pipeline.run(&mut trace, |_| Ok(()));

        assert_eq!(result, Err(GrubError::bad_request("second failed")));
        assert_eq!(trace.steps, vec!["first", "second"]);
    }

    #[test]
    fn test_effect_runs_after_all_checks_pass() {
        let pipeline = Pipeline::new("trace").check("first", first);

        let mut trace = Trace::default();
        let result = pipeline.run(&mut trace, |t| {
            t.steps.push("effect");
            Ok(t.steps.len())
        });

        assert_eq!(result, Ok(2));
        assert_eq!(trace.steps, vec!["first", "effect"]);
    }

    #[test]
    fn test_effect_skipped_on_failure() {
        let pipeline = Pipeline::new("trace").check("second", second_fails);

        let mut trace = Trace::default();
        let _ = pipeline.run(&mut trace, |t| {
            t.steps.push("effect");
            Ok(())
        });

        assert_eq!(trace.steps, vec!["second"]);
    }

    #[test]
    fn test_empty_pipeline_runs_effect() {
        let pipeline: Pipeline<Trace> = Pipeline::new("empty");
        assert_eq!(pipeline.run(&mut Trace::default(), |_| Ok("done")), Ok("done"));
    }

    #[test]
    fn test_check_names() {
        let pipeline = Pipeline::new("trace")
            .check("first", first)
            .check("third", third);
        assert_eq!(pipeline.name(), "trace");
        assert_eq!(pipeline.check_names(), vec!["first", "third"]);
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    impl Record for Item {
        fn resource_name() -> &'static str {
            "item"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_locate_attaches_record() {
        let store = InMemoryStore::with_records(vec![Item { id: "7".into() }]);
        let data = json!({});
        let mut ctx: RequestContext<'_, Item> =
            RequestContext::new(&store, &data).with_route_id("7");

        assert!(ctx.locate(|id| format!("missing {}", id)).is_ok());
        assert_eq!(ctx.located().map(|item| item.id.clone()), Ok("7".to_string()));
    }

    #[test]
    fn test_locate_miss_is_not_found() {
        let store: InMemoryStore<Item> = InMemoryStore::new();
        let data = json!({});
        let mut ctx: RequestContext<'_, Item> =
            RequestContext::new(&store, &data).with_route_id("8");

        let err = ctx.locate(|id| format!("missing {}", id)).unwrap_err();
        assert_eq!(err, GrubError::not_found("missing 8"));
        assert!(ctx.located().is_err());
    }

    #[test]
    fn test_field_reads_data_object() {
        let store: InMemoryStore<Item> = InMemoryStore::new();
        let data = json!({ "name": "Taco" });
        let ctx: RequestContext<'_, Item> = RequestContext::new(&store, &data);

        assert_eq!(ctx.field("name"), Some(&json!("Taco")));
        assert_eq!(ctx.field("price"), None);
        assert_eq!(ctx.route_id(), "");
    }
}
