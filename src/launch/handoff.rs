/// The host runtime's own launch continuation.
///
/// `S` is the saved-instance-state token handed to the launch callback. The hook
/// never looks inside it; it is moved into [`continue_launch`](Self::continue_launch)
/// as received.
pub trait LaunchContinuation<S> {
    fn continue_launch(&mut self, saved_state: S);
}

impl<S, F> LaunchContinuation<S> for F
where
    F: FnMut(S),
{
    fn continue_launch(&mut self, saved_state: S) {
        self(saved_state)
    }
}
