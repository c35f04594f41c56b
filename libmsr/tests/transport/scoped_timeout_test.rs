use libmsr::transport::{MockTransport, Transport};
use libmsr::types::ReadTimeout;
use libmsr::utils::{ScopedTimeout, ms};

#[test]
fn guard_reads_with_override_then_restores() {
    let mut m = MockTransport::new();
    m.set_read_timeout(ReadTimeout::Bounded(ms(200))).unwrap();
    m.push_bytes(b"z");

    {
        let mut guard = ScopedTimeout::new(&mut m, ReadTimeout::Unbounded).unwrap();
        assert_eq!(guard.receive_byte().unwrap(), Some(b'z'));
    }

    assert_eq!(m.read_timeout(), ReadTimeout::Bounded(ms(200)));
    assert_eq!(m.reads, vec![ReadTimeout::Unbounded]);
}

#[test]
fn guard_restores_after_error_path() {
    fn failing(t: &mut MockTransport) -> libmsr::Result<()> {
        let _guard = ScopedTimeout::new(t, ReadTimeout::Unbounded)?;
        Err(libmsr::Error::NoTransport)
    }

    let mut m = MockTransport::new();
    let before = m.read_timeout();
    assert!(failing(&mut m).is_err());
    assert_eq!(m.read_timeout(), before);
}

#[test]
fn guard_over_trait_object() {
    let mut boxed: Box<dyn Transport + Send> = Box::new(MockTransport::new());
    let guard = ScopedTimeout::new(boxed.as_mut(), ReadTimeout::Unbounded).unwrap();
    assert!(guard.read_timeout().is_unbounded());
    guard.restore().unwrap();
    assert!(!boxed.read_timeout().is_unbounded());
}
