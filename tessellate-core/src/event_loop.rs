use crate::config::Config;
use crate::{DisplayServer, Manager};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Adopts the host's windows and keeps them tiled until the host disables tiling.
    /// Returns the manager once tiles have been released.
    pub async fn event_loop(mut self) -> Self {
        self.startup();

        //main event loop
        let mut event_buffer = vec![];
        loop {
            // All buffered mutations are applied, one pass covers them.
            self.refresh();
            // Hand over whatever the handlers and the pass queued.
            let mut follow_ups = self.execute_actions();
            event_buffer.append(&mut follow_ups);

            if self.disable_requested {
                break;
            }
            self.display_server.flush();

            tokio::select! {
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| {
                            self.display_event_handler(event);
                        });
                }
            }
        }
        self
    }
}
