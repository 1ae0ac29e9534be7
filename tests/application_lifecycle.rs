//! Request lifecycle and context binding.

use std::error::Error as _;
use std::sync::Arc;

use webframe_core::application::{
    Application, ProcessError, RequestProcessor, RunError, SharedContext, TransportError,
};
use webframe_core::module::Module;

mod common;

/// Records its calls into the shared event log.
struct Recorder {
    log: common::EventLog,
}

impl RequestProcessor for Recorder {
    fn process_request(&self, app: &Application) -> Result<(), ProcessError> {
        self.log.lock().unwrap().push(format!("process:{}", app.name()));
        Ok(())
    }
}

#[test]
fn test_bind_registers_with_context() {
    let context = common::RecordingContext::default();
    let mut app = Application::new(common::ok_processor());
    app.set_name("Blog");

    let app = app.bind(&context);

    let bound = context.bound.lock().unwrap();
    assert_eq!(bound.len(), 1);
    assert!(Arc::ptr_eq(&bound[0], &app));
    assert_eq!(bound[0].name(), "Blog");
}

#[test]
fn test_shared_context_keeps_first_application() {
    let context = SharedContext::new();
    assert!(context.application().is_none());

    let mut first = Application::new(common::ok_processor());
    first.set_name("first");
    let first = first.bind(&context);
    let mut second = Application::new(common::ok_processor());
    second.set_name("second");
    let _second = second.bind(&context);

    let held = context.application().unwrap();
    assert!(Arc::ptr_eq(&held, &first));
}

#[test]
fn test_bind_registers_core_aliases() {
    let context = SharedContext::new();
    let mut app = Application::new(common::ok_processor());
    app.set_base_path("/srv/app/");
    app.set_path_of_alias("ext", Some("/opt/extensions"));

    let app = app.bind(&context);

    assert_eq!(app.path_of_alias("application").as_deref(), Some("/srv/app"));
    assert_eq!(app.path_of_alias("ext").as_deref(), Some("/opt/extensions"));
    assert_eq!(
        app.path_of_alias("application.models.Post").as_deref(),
        Some("/srv/app/models/Post")
    );
}

#[test]
fn test_bind_without_base_path_registers_nothing() {
    let app = Application::new(common::ok_processor()).bind(&SharedContext::new());
    assert!(app.aliases().is_empty());
}

#[test]
fn test_run_calls_processor_between_hooks() {
    let log = common::event_log();
    let mut app = Application::new(Box::new(Recorder { log: log.clone() }));
    app.set_name("Shop");

    let begin_log = log.clone();
    app.on_begin_request(Box::new(move |_: &Application| {
        begin_log.lock().unwrap().push("begin".into())
    }));
    let end_log = log.clone();
    app.on_end_request(Box::new(move |_: &Application| end_log.lock().unwrap().push("end".into())));

    let app = app.bind(&SharedContext::new());
    app.run().unwrap();
    app.run().unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["begin", "process:Shop", "end", "begin", "process:Shop", "end"]
    );
}

#[test]
fn test_end_hooks_skipped_on_failure() {
    let log = common::event_log();
    let mut app = Application::new(common::failing_processor(|| ProcessError::other("boom")));
    let end_log = log.clone();
    app.on_end_request(Box::new(move |_: &Application| end_log.lock().unwrap().push("end".into())));

    assert!(app.run().is_err());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_run_passes_io_failure_through() {
    let app = Application::new(common::failing_processor(|| {
        ProcessError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "runtime directory not writable",
        ))
    }));

    match app.run() {
        Err(RunError::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
            assert_eq!(e.to_string(), "runtime directory not writable");
        }
        other => panic!("expected I/O failure, got {:?}", other),
    }
}

#[test]
fn test_run_passes_transport_failure_through() {
    let app = Application::new(common::failing_processor(|| {
        TransportError::new("response already committed").into()
    }));

    match app.run() {
        Err(RunError::Transport(e)) => {
            assert_eq!(e.message(), "response already committed");
            assert!(e.source().is_none());
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[test]
fn test_run_wraps_other_failures() {
    #[derive(Debug)]
    struct MissingView(&'static str);

    impl std::fmt::Display for MissingView {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "view {} not found", self.0)
        }
    }

    impl std::error::Error for MissingView {}

    let app = Application::new(common::failing_processor(|| {
        ProcessError::other(MissingView("site/index"))
    }));

    match app.run() {
        Err(RunError::Transport(e)) => {
            assert_eq!(e.message(), "view site/index not found");
            let cause = e.source().unwrap();
            assert!(cause.downcast_ref::<MissingView>().is_some());
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[test]
fn test_language_fallback_scenario() {
    let mut app = Application::new(common::ok_processor());
    app.set_language(None);
    assert_eq!(app.source_language(), "en_us");
    assert_eq!(app.language(), "en_us");

    app.set_language(Some("pt_br".into()));
    assert_eq!(app.language(), "pt_br");
}

#[test]
fn test_id_stable_across_threads() {
    let mut app = Application::new(common::ok_processor());
    app.set_base_path("/srv/app");
    app.set_name("Shop");
    let app = app.bind(&SharedContext::new());

    let ids: Vec<String> = (0..4)
        .map(|_| {
            let app = Arc::clone(&app);
            std::thread::spawn(move || app.id().to_string())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(ids.iter().all(|id| id == app.id()));
}
