use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use hotelfix::{
    config::ClientConfig,
    service::AppApi,
    util::notification::{poll_urgent_tickets, Notification, NotificationCenter, PollOutcome},
};

use crate::client::{
    store::toast::Toasts,
    util::{sleep, use_error_handler},
};

/// Handle to the urgent-ticket notifications of the current hotel
#[derive(Clone)]
pub struct Notifications {
    center: Rc<RefCell<NotificationCenter>>,
    items: Signal<Vec<Notification>>,
}

impl Notifications {
    pub fn items(&self) -> Vec<Notification> {
        self.items.read().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.items.read().iter().filter(|n| !n.read).count()
    }

    pub fn mark_as_read(&self, id: &str) {
        self.center.borrow_mut().mark_as_read(id);
        self.sync();
    }

    pub fn mark_all_as_read(&self) {
        self.center.borrow_mut().mark_all_as_read();
        self.sync();
    }

    pub fn clear(&self) {
        self.center.borrow_mut().clear();
        self.sync();
    }

    fn sync(&self) {
        let mut items = self.items;
        items.set(self.center.borrow().notifications().to_vec());
    }
}

/// Poll the hotel's tickets on the configured interval and toast each new urgent,
/// unassigned ticket. Polling stops when the calling component unmounts.
pub fn use_notifications(hotel_id: Option<i64>) -> Notifications {
    let api = use_context::<AppApi>();
    let config = use_context::<ClientConfig>();
    let toasts = use_context::<Toasts>();
    let handle_error = use_error_handler();

    let center = use_hook(|| Rc::new(RefCell::new(NotificationCenter::new())));
    let items = use_signal(Vec::<Notification>::new);

    let notifications = Notifications {
        center: center.clone(),
        items,
    };

    let handle = notifications.clone();
    use_future(move || {
        let api = api.clone();
        let handle = handle.clone();
        let interval = Duration::from_secs(config.notification_poll_interval_secs);

        async move {
            let Some(hotel_id) = hotel_id else {
                return;
            };

            loop {
                let outcome = PollOutcome::from(
                    poll_urgent_tickets(&api, hotel_id, &handle.center).await,
                );

                match outcome {
                    PollOutcome::Alerts(fresh) => {
                        for notification in &fresh {
                            toasts.warning(notification.title.clone());
                        }
                        handle.sync();
                    }
                    PollOutcome::Quiet => (),
                    PollOutcome::SessionExpired(e) => {
                        tracing::info!("Stopping notification polling: {}", e);
                        handle_error(e);
                        return;
                    }
                    PollOutcome::Failed(e) => {
                        tracing::warn!(hotel_id = hotel_id, "Notification poll failed: {}", e)
                    }
                }

                sleep(interval).await;
            }
        }
    });

    notifications
}
