#![allow(dead_code)]

use cordule::{Module, ModuleContext};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Test Request Types
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub text: String,
}

impl Params {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

pub type Trace = Rc<RefCell<Vec<String>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Test Modules
// ============================================================================

/// Answers `request` with a fixed reply from `init` onward, and unsubscribes
/// on `destroy` when asked to.
pub struct ReplyModule {
    pub request: &'static str,
    pub reply: &'static str,
    pub unobserve_on_destroy: bool,
}

impl ReplyModule {
    pub fn new(request: &'static str, reply: &'static str) -> Self {
        Self {
            request,
            reply,
            unobserve_on_destroy: false,
        }
    }

    pub fn tidy(request: &'static str, reply: &'static str) -> Self {
        Self {
            request,
            reply,
            unobserve_on_destroy: true,
        }
    }
}

impl Module<Params, String> for ReplyModule {
    fn init(&mut self, cx: &ModuleContext<'_, Params, String>) {
        let reply = self.reply;
        cx.observe(self.request, move |_cx, _params| Some(reply.to_string()));
    }

    fn destroy(&mut self, cx: &ModuleContext<'_, Params, String>) {
        if self.unobserve_on_destroy {
            cx.unobserve(self.request);
        }
    }
}

/// A module with no behaviour of its own; tests subscribe observers for it.
pub struct Inert;

impl Module<Params, String> for Inert {
    fn init(&mut self, _cx: &ModuleContext<'_, Params, String>) {}

    fn destroy(&mut self, _cx: &ModuleContext<'_, Params, String>) {}
}
