//! Fixtures shared by the unit tests: a tiny plan tree and a few passes that
//! record how often they ran.

use std::{cell::Cell, sync::Arc};

use crate::{
    flags::flag_set::Flag,
    transform::{errors::TransformError, transform_pass::{TransformPass, TransformResult}},
};


#[derive(Debug, PartialEq, Clone)]
pub struct TestPlan {
    pub label: String,
    pub children: Vec<Arc<TestPlan>>,
}

impl TestPlan {
    /// Labels in pre-order, root first.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = vec![self.label.clone()];
        for child in &self.children {
            labels.extend(child.labels());
        }
        labels
    }

    pub fn count(&self, label: &str) -> usize {
        self.labels().iter().filter(|l| l.as_str() == label).count()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|child| child.depth()).max().unwrap_or(0)
    }
}

pub fn leaf(label: &str) -> Arc<TestPlan> {
    Arc::new(TestPlan {
        label: label.to_string(),
        children: vec![],
    })
}

pub fn unary(label: &str, input: Arc<TestPlan>) -> Arc<TestPlan> {
    Arc::new(TestPlan {
        label: label.to_string(),
        children: vec![input],
    })
}


/// Puts a new node labelled `label` on top of its input.
pub struct Wrap {
    pub label: String,
    pub calls: Cell<usize>,
    pub flags: Vec<Flag>,
}

impl Wrap {
    pub fn new(label: &str) -> Self {
        Wrap {
            label: label.to_string(),
            calls: Cell::new(0),
            flags: vec![],
        }
    }

    pub fn gated(label: &str, flags: &[Flag]) -> Self {
        Wrap {
            flags: flags.to_vec(),
            ..Wrap::new(label)
        }
    }
}

impl TransformPass<TestPlan> for Wrap {
    fn transform(&self, plan: Arc<TestPlan>) -> TransformResult<Arc<TestPlan>> {
        self.calls.set(self.calls.get() + 1);
        Ok(unary(&self.label, plan))
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn required_flags(&self) -> &[Flag] {
        &self.flags
    }
}


/// Finds nothing to rewrite.
pub struct Identity {
    pub calls: Cell<usize>,
}

impl Identity {
    pub fn new() -> Self {
        Identity { calls: Cell::new(0) }
    }
}

impl TransformPass<TestPlan> for Identity {
    fn transform(&self, plan: Arc<TestPlan>) -> TransformResult<Arc<TestPlan>> {
        self.calls.set(self.calls.get() + 1);
        Ok(plan)
    }

    fn name(&self) -> &str {
        "identity"
    }
}


/// Rejects every plan whose root is labelled `node`.
pub struct Reject {
    pub node: String,
    pub calls: Cell<usize>,
}

impl Reject {
    pub fn new(node: &str) -> Self {
        Reject {
            node: node.to_string(),
            calls: Cell::new(0),
        }
    }
}

impl TransformPass<TestPlan> for Reject {
    fn transform(&self, plan: Arc<TestPlan>) -> TransformResult<Arc<TestPlan>> {
        self.calls.set(self.calls.get() + 1);
        if plan.label == self.node {
            return Err(TransformError::UnsupportedNode {
                pass: self.name().to_string(),
                node: plan.label.clone(),
            });
        }
        Ok(plan)
    }

    fn name(&self) -> &str {
        "reject"
    }
}
