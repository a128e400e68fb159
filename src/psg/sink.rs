//! Byte sink abstraction
//!
//! The driver never touches pins or ports itself. Whatever actually clocks a
//! byte onto the chip (a GPIO bit-bang routine, an I/O port write, a test
//! buffer) implements [`ByteSink`].

use std::convert::Infallible;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Destination for PSG command bytes
///
/// # Example
///
/// ```
/// use sn76489_psg::{ByteSink, Channel, Psg};
///
/// struct Port(Vec<u8>);
///
/// impl ByteSink for Port {
///     type Error = std::convert::Infallible;
///
///     fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
///         self.0.push(byte);
///         Ok(())
///     }
/// }
///
/// let mut psg = Psg::new(Port(Vec::new()));
/// psg.set_volume(Channel::Ch2, 0).unwrap();
/// assert_eq!(psg.sink().0, vec![0xBF]);
/// ```
pub trait ByteSink {
    /// Error reported by the transport; the driver passes it through untouched
    type Error;

    /// Deliver one byte to the chip
    fn send(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Deliver the bytes of one command, in order
    ///
    /// The default calls [`send`](ByteSink::send) once per byte and stops at
    /// the first error. Sinks shared between writers override this to keep a
    /// command's bytes contiguous.
    fn send_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.send(byte)?;
        }
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }

    fn send_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).send(byte)
    }

    fn send_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send_all(bytes)
    }
}

/// Sink backed by a closure that cannot fail
///
/// ```
/// use sn76489_psg::{FnSink, NoiseCtrl, NoiseType, Psg};
///
/// let mut written = Vec::new();
/// let mut psg = Psg::new(FnSink(|b: u8| written.push(b)));
/// psg.set_noise(NoiseType::White, NoiseCtrl::Low).unwrap();
/// drop(psg);
/// assert_eq!(written, vec![0xE6]);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8)> ByteSink for FnSink<F> {
    type Error = Infallible;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        (self.0)(byte);
        Ok(())
    }
}

/// Sink shared between several drivers on one physical bus
///
/// Cloning yields another handle to the same underlying sink. A whole
/// command is written under a single lock, so a tone's latch and data bytes
/// are never split by another handle's writes.
pub struct SharedSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedSink<S> {
    /// Wrap a sink for shared use
    pub fn new(sink: S) -> Self {
        SharedSink {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Lock the underlying sink
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }

    /// Recover the sink if this is the last handle
    pub fn try_into_inner(self) -> Result<S, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| SharedSink { inner })
    }
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        SharedSink {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ByteSink> ByteSink for SharedSink<S> {
    type Error = S::Error;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.lock().send(byte)
    }

    fn send_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.lock().send_all(bytes)
    }
}
