//! Mutable render state threaded through one conversion.

use std::ops::{Deref, DerefMut};

/// Nesting state carried through the recursive render.
///
/// Both counters are only ever changed through the scope guards returned by
/// [`RenderContext::enter_list`] and [`RenderContext::descend`], which undo
/// their increment when dropped.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    list_depth: usize,
    depth: usize,
}

impl RenderContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of enclosing `ul`/`ol` elements
    pub(crate) fn list_depth(&self) -> usize {
        self.list_depth
    }

    pub(crate) fn in_list(&self) -> bool {
        self.list_depth > 0
    }

    /// Element nesting depth below the render root
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter_list(&mut self) -> Scope<'_> {
        self.list_depth += 1;
        Scope {
            ctx: self,
            counter: Counter::ListDepth,
        }
    }

    pub(crate) fn descend(&mut self) -> Scope<'_> {
        self.depth += 1;
        Scope {
            ctx: self,
            counter: Counter::Depth,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Counter {
    ListDepth,
    Depth,
}

/// Borrow of the context that restores one counter on drop.
#[derive(Debug)]
pub(crate) struct Scope<'a> {
    ctx: &'a mut RenderContext,
    counter: Counter,
}

impl Deref for Scope<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        match self.counter {
            Counter::ListDepth => self.ctx.list_depth -= 1,
            Counter::Depth => self.ctx.depth -= 1,
        }
    }
}
