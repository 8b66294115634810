/// Watches the events a solver emits while it runs.
///
/// A solver hands every event to its observer and inspects the returned
/// `Option<A>`: `Some(action)` asks for a solver-specific change of course and
/// `None` leaves the run alone. Drivers that always run to completion pick
/// [`std::convert::Infallible`] for `A`, so no action can ever be returned.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// ignores every event.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    fn drive<O: Observer<u32, Infallible>>(mut observer: O, events: &[u32]) {
        for event in events {
            let _ = observer.observe(event);
        }
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        drive(
            |event: &u32| {
                seen.push(*event);
                None
            },
            &[1, 2, 3],
        );
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<Infallible> = ().observe(&7_u32);
        assert!(action.is_none());
    }
}
