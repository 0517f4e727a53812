use anyhow::anyhow;
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::error::QuizError;


#[derive(Debug)]
pub enum DecodeState {
    InProgress,
    Done(Result<String, QuizError>),
    Superseded,
}

/// Hands out decode requests. Only the most recent request may deliver its text.
#[derive(Clone, Default)]
pub struct Loader {
    latest_request: Arc<Mutex<u64>>,
}

pub struct DecodeHandle {
    request: u64,
    latest_request: Arc<Mutex<u64>>,
    receiver: Receiver<Result<String, QuizError>>,
}

impl Loader {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn load<F>(&self, decode: F) -> DecodeHandle
    where
        F: FnOnce() -> Result<String, QuizError> + Send + 'static,
    {
        let request = self.supersede_pending();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The handle may be gone already, nobody is waiting for this text then
            sender.send(decode()).ok();
        });
        log::debug!("Started decode request #{}", request);
        DecodeHandle {
            request,
            latest_request: self.latest_request.clone(),
            receiver,
        }
    }

    pub fn supersede_pending(&self) -> u64 {
        let mut latest_request = self.latest_request.lock();
        *latest_request += 1;
        *latest_request
    }
}

impl DecodeHandle {
    pub fn get_request(&self) -> u64 {
        self.request
    }

    pub fn is_current(&self) -> bool {
        *self.latest_request.lock() == self.request
    }

    fn deliver(&self, result: Result<String, QuizError>) -> DecodeState {
        if self.is_current() {
            DecodeState::Done(result)
        } else {
            log::info!("Discarding superseded decode request #{}", self.request);
            DecodeState::Superseded
        }
    }

    pub fn poll(&self) -> DecodeState {
        if !self.is_current() {
            return DecodeState::Superseded;
        }
        match self.receiver.try_recv() {
            Ok(result) => self.deliver(result),
            Err(TryRecvError::Empty) => DecodeState::InProgress,
            Err(TryRecvError::Disconnected) => self.deliver(Err(QuizError::Read(anyhow!(
                "document decoder stopped unexpectedly"
            )))),
        }
    }

    pub fn wait(self) -> DecodeState {
        match self.receiver.recv() {
            Ok(result) => self.deliver(result),
            Err(_) => self.deliver(Err(QuizError::Read(anyhow!(
                "document decoder stopped unexpectedly"
            )))),
        }
    }
}
