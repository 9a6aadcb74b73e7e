//! Stack growth for recursion over arbitrarily deep values.
//!
//! Both the parser and the renderer recurse once per nesting level of the
//! input. On native targets each level checks the remaining stack and, when
//! it drops below the red zone, continues on a freshly allocated segment.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
