//! Terminal observer: prints notices and panels through the chosen theme.

use roam_app::{Notice, Renderer, SessionObserver, TracingObserver, renderer_for};
use roam_core::ThemeKind;
use roam_route::RouteSummary;

pub struct ConsoleObserver {
    renderer: Box<dyn Renderer>,
    log:      TracingObserver,
    /// When false (JSON mode) panels and notices are not printed.
    visible:  bool,
}

impl ConsoleObserver {
    pub fn new(theme: ThemeKind, visible: bool) -> Self {
        Self { renderer: renderer_for(theme), log: TracingObserver, visible }
    }

    /// Render with the current theme and print to stdout.
    pub fn print(&self, render: impl FnOnce(&dyn Renderer) -> String) {
        if self.visible {
            println!("{}", render(self.renderer.as_ref()));
        }
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_notice(&mut self, notice: &Notice) {
        self.log.on_notice(notice);
        if self.visible {
            eprintln!("{}", self.renderer.notice(notice));
        }
    }

    fn on_route(&mut self, route: &RouteSummary) {
        self.log.on_route(route);
    }
}
