use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizSettings;
use quiz_core::bank::blockchain_bank;
use quiz_core::model::QuestionBank;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizScreen, QuizView};
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Clone, Default)]
pub struct ScreenHandles {
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

impl ScreenHandles {
    fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("screen vm registered")
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    vm: QuizVm,
    handles: ScreenHandles,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let vm = use_signal(|| props.vm.clone());
    use_hook(|| *props.handles.vm.borrow_mut() = Some(vm));
    rsx! { QuizScreen { vm } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ScreenHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Run pending effects and give newly spawned tasks their first poll.
    pub async fn settle(&mut self) {
        self.drive_async().await;
        self.drive_async().await;
    }

    /// Let `secs` whole seconds pass on a paused clock, one tick interval at a time.
    pub async fn advance_secs(&mut self, secs: u64) {
        for _ in 0..secs {
            tokio::time::advance(Duration::from_secs(1)).await;
            self.drive_async().await;
        }
    }

    /// Send `intent` to the screen's view-model, as a button click would.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let mut vm = self.handles.vm();
        self.dom.in_runtime(|| vm.write().dispatch(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness rendering the full quiz view from an app context.
pub fn setup_app_harness(bank: QuestionBank) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(bank),
        settings: QuizSettings::default(),
    });
    let dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app });
    ViewHarness {
        dom,
        handles: ScreenHandles::default(),
    }
}

/// Harness rendering the quiz screen for an already-prepared view-model.
pub fn setup_screen_harness(vm: QuizVm) -> ViewHarness {
    let handles = ScreenHandles::default();
    let dom = VirtualDom::new_with_props(
        ScreenHarness,
        ScreenHarnessProps {
            vm,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

/// A blockchain quiz view-model with `intents` already applied.
pub fn quiz_vm_after(intents: impl IntoIterator<Item = QuizIntent>) -> QuizVm {
    let mut vm = QuizVm::new(Arc::new(blockchain_bank()), QuizSettings::default())
        .expect("blockchain bank is not empty");
    for intent in intents {
        vm.dispatch(intent);
    }
    vm
}
