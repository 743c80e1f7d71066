//! Test-only helpers.

use core::future::Future;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

/// Run a future to completion (simple blocking executor).
///
/// Mock sources and sinks resolve immediately, so a single poll with a
/// no-op waker suffices; a `Pending` means a mock misbehaved.
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = core::pin::pin!(f);
    match f.as_mut().poll(&mut cx) {
        Poll::Ready(result) => result,
        Poll::Pending => panic!("mock future returned Pending unexpectedly"),
    }
}
