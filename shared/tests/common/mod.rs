#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

use futures::channel::oneshot;
use shared::render::Element;
use shared::{
    ApiCall, ApiClient, ClientConfig, ClientError, HistoryManager, Node, RawResponse,
    RequestOrchestrator, Transport, Ui,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

type Reply = Result<RawResponse, ClientError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Records every call and answers from a script, in order.
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Rc<RefCell<Vec<ApiCall>>>,
    script: Rc<RefCell<VecDeque<Scripted>>>,
}

impl MockTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.push(Scripted::Ready(Ok(RawResponse::new(status, body))))
    }

    pub fn fail(self, error: ClientError) -> Self {
        self.push(Scripted::Ready(Err(error)))
    }

    /// The next call stays pending until the returned sender fires.
    pub fn gated(self) -> (Self, oneshot::Sender<Reply>) {
        let (tx, rx) = oneshot::channel();
        (self.push(Scripted::Gated(rx)), tx)
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn push(self, scripted: Scripted) -> Self {
        self.script.borrow_mut().push_back(scripted);
        self
    }
}

impl Transport for MockTransport {
    async fn send(&self, call: ApiCall) -> Result<RawResponse, ClientError> {
        self.calls.borrow_mut().push(call);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Network("gate dropped".into()))),
            None => Err(ClientError::Network("no scripted reply".into())),
        }
    }
}

pub struct Harness {
    pub transport: MockTransport,
    pub ui: Ui,
    pub orchestrator: RequestOrchestrator<MockTransport>,
    pub history: HistoryManager<MockTransport>,
}

pub fn harness(transport: MockTransport) -> Harness {
    init_logging();
    let ui = Ui::detached(ClientConfig::default());
    let client = Rc::new(ApiClient::new(transport.clone()));
    Harness {
        transport,
        orchestrator: RequestOrchestrator::new(Rc::clone(&client), ui.clone()),
        history: HistoryManager::new(client, ui.clone()),
        ui,
    }
}

impl Harness {
    pub fn status_text(&self) -> Option<String> {
        self.ui.state().status.current().map(|message| message.text.clone())
    }
}

/// Depth-first search for an element whose full text equals `needle`.
pub fn has_block_text(nodes: &[Node], needle: &str) -> bool {
    nodes.iter().any(|node| match node {
        Node::Text(text) => text == needle,
        Node::Element(Element { children, .. }) => {
            node.text_content() == needle || has_block_text(children, needle)
        }
    })
}
