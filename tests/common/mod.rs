//! In-memory automation host mimicking the slice of the PowerPoint object
//! model the exporter touches. Every call is journaled and live handles are
//! counted so tests can assert on cleanup.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use pptscreenshot::{AutomationHost, Dispatch, HostError, Variant};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportCall {
    pub output: PathBuf,
    pub filter: String,
    pub width: i32,
    pub height: i32,
    pub slide: i32,
}

#[derive(Debug)]
pub struct State {
    pub slide_master: (f64, f64),
    pub slide_count: i32,
    pub fail_connect: bool,
    pub fail_open: bool,
    pub fail_export: bool,
    pub fail_saved: bool,
    pub fail_close: bool,

    pub connects: usize,
    pub live_handles: i64,
    pub journal: Vec<String>,
    pub opened: Option<(String, Vec<i32>)>,
    pub saved: Option<i32>,
    pub closed: bool,
    pub exports: Vec<ExportCall>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            slide_master: (960.0, 540.0),
            slide_count: 5,
            fail_connect: false,
            fail_open: false,
            fail_export: false,
            fail_saved: false,
            fail_close: false,
            connects: 0,
            live_handles: 0,
            journal: Vec::new(),
            opened: None,
            saved: None,
            closed: false,
            exports: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<State>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(self, f: impl FnOnce(&mut State)) -> Self {
        f(&mut self.state.borrow_mut());
        self
    }

    pub fn state(&self) -> std::cell::Ref<'_, State> {
        self.state.borrow()
    }

    fn object(&self, kind: Kind) -> FakeObject {
        self.state.borrow_mut().live_handles += 1;
        FakeObject {
            kind,
            host: self.clone(),
        }
    }
}

impl AutomationHost for FakeHost {
    type Object = FakeObject;

    fn connect(&self, prog_id: &str) -> Result<FakeObject, HostError> {
        {
            let mut state = self.state.borrow_mut();
            state.connects += 1;
            state.journal.push(format!("connect {}", prog_id));
            if state.fail_connect {
                return Err(HostError::Connect {
                    prog_id: prog_id.to_string(),
                    message: "class not registered".to_string(),
                });
            }
        }
        Ok(self.object(Kind::Application))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Application,
    Presentations,
    Presentation,
    SlideMaster,
    Slides,
    Slide(i32),
}

pub struct FakeObject {
    kind: Kind,
    host: FakeHost,
}

impl Drop for FakeObject {
    fn drop(&mut self) {
        let mut state = self.host.state.borrow_mut();
        state.live_handles -= 1;
        state.journal.push(format!("release {:?}", self.kind));
    }
}

fn failure(member: &str) -> HostError {
    HostError::Invoke {
        member: member.to_string(),
        message: "simulated failure".to_string(),
    }
}

fn int_arg(args: &[Variant<FakeObject>], i: usize) -> i32 {
    match args.get(i) {
        Some(Variant::Int(v)) => *v,
        other => panic!("expected int argument {}, got {:?}", i, other),
    }
}

fn text_arg(args: &[Variant<FakeObject>], i: usize) -> String {
    match args.get(i) {
        Some(Variant::Text(v)) => v.clone(),
        other => panic!("expected text argument {}, got {:?}", i, other),
    }
}

impl Dispatch for FakeObject {
    fn get(&self, name: &str) -> Result<Variant<Self>, HostError> {
        self.host
            .state
            .borrow_mut()
            .journal
            .push(format!("get {:?}.{}", self.kind, name));
        let (master, count) = {
            let state = self.host.state.borrow();
            (state.slide_master, state.slide_count)
        };
        match (self.kind, name) {
            (Kind::Application, "Presentations") => {
                Ok(Variant::Object(self.host.object(Kind::Presentations)))
            }
            (Kind::Presentation, "SlideMaster") => {
                Ok(Variant::Object(self.host.object(Kind::SlideMaster)))
            }
            (Kind::Presentation, "Slides") => Ok(Variant::Object(self.host.object(Kind::Slides))),
            (Kind::SlideMaster, "Width") => Ok(Variant::Float(master.0)),
            (Kind::SlideMaster, "Height") => Ok(Variant::Float(master.1)),
            (Kind::Slides, "Count") => Ok(Variant::Int(count)),
            _ => Err(failure(name)),
        }
    }

    fn put(&self, name: &str, value: Variant<Self>) -> Result<(), HostError> {
        let mut state = self.host.state.borrow_mut();
        state.journal.push(format!("put {:?}.{}", self.kind, name));
        match (self.kind, name, value) {
            (Kind::Presentation, "Saved", Variant::Int(_)) if state.fail_saved => {
                Err(failure(name))
            }
            (Kind::Presentation, "Saved", Variant::Int(v)) => {
                state.saved = Some(v);
                Ok(())
            }
            _ => Err(failure(name)),
        }
    }

    fn call(&self, name: &str, args: Vec<Variant<Self>>) -> Result<Variant<Self>, HostError> {
        self.host
            .state
            .borrow_mut()
            .journal
            .push(format!("call {:?}.{}", self.kind, name));
        match (self.kind, name) {
            (Kind::Presentations, "Open") => {
                let path = text_arg(&args, 0);
                let flags = (1..4).map(|i| int_arg(&args, i)).collect();
                let mut state = self.host.state.borrow_mut();
                if state.fail_open {
                    return Err(failure(name));
                }
                state.opened = Some((path, flags));
                drop(state);
                Ok(Variant::Object(self.host.object(Kind::Presentation)))
            }
            (Kind::Presentation, "Close") => {
                let mut state = self.host.state.borrow_mut();
                if state.fail_close {
                    return Err(failure(name));
                }
                state.closed = true;
                Ok(Variant::Empty)
            }
            (Kind::Slides, "Item") => {
                let index = int_arg(&args, 0);
                let count = self.host.state.borrow().slide_count;
                if index < 1 || index > count {
                    return Err(failure(name));
                }
                Ok(Variant::Object(self.host.object(Kind::Slide(index))))
            }
            (Kind::Slide(index), "Export") => {
                let call = ExportCall {
                    output: PathBuf::from(text_arg(&args, 0)),
                    filter: text_arg(&args, 1),
                    width: int_arg(&args, 2),
                    height: int_arg(&args, 3),
                    slide: index,
                };
                if self.host.state.borrow().fail_export {
                    return Err(failure(name));
                }
                fs::write(&call.output, format!("{}x{}", call.width, call.height))
                    .map_err(|e| HostError::invoke(name, e))?;
                self.host.state.borrow_mut().exports.push(call);
                Ok(Variant::Empty)
            }
            _ => Err(failure(name)),
        }
    }
}

/// Scratch directory holding an existing `deck.pptx`.
pub fn scratch() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deck.pptx");
    fs::write(&input, b"deck").unwrap();
    (dir, input)
}
