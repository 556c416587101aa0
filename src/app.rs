// Jamii application state and update loop

use std::sync::Arc;

use iced::widget::{column, container, row};
use iced::{Application, Command, Element, Length, Theme};
use log::{error, info, warn};

use crate::calendar::CalendarState;
use crate::config::{COPY_FEEDBACK_TIMEOUT, NOTIFICATION_TIMEOUT};
use crate::messages::{Message, TableAction};
use crate::models::{Collection, Meeting, Record};
use crate::notification::Notifier;
use crate::store::Backend;
use crate::table::{self, RecordTable};
use crate::ui::{self, styles::BackgroundStyle};
use crate::ui_state::{UiState, View};
use crate::zoom::ZoomListing;

pub struct JamiiApp {
    store: Arc<Backend>,
    user_id: String,

    ui_state: UiState,
    notifier: Notifier,

    family: RecordTable,
    meetings: RecordTable,
    michango: RecordTable,
    calendar: CalendarState,

    // Built from the first meetings load and not refreshed afterwards.
    zoom: Option<ZoomListing>,
}

impl JamiiApp {
    fn table(&self, collection: Collection) -> &RecordTable {
        match collection {
            Collection::Family => &self.family,
            Collection::Meetings => &self.meetings,
            Collection::Michango => &self.michango,
        }
    }

    fn table_mut(&mut self, collection: Collection) -> &mut RecordTable {
        match collection {
            Collection::Family => &mut self.family,
            Collection::Meetings => &mut self.meetings,
            Collection::Michango => &mut self.michango,
        }
    }

    fn apply_rows(&mut self, collection: Collection, rows: Vec<Record>) {
        if collection == Collection::Meetings {
            let meetings: Vec<Meeting> = rows.iter().map(Meeting::from).collect();
            if self.zoom.is_none() {
                self.zoom = Some(ZoomListing::from_meetings(&meetings));
            }
            self.calendar.set_meetings(meetings);
        }
        self.table_mut(collection).set_rows(rows);
    }

    /// Shows an error banner and schedules its dismissal.
    fn notify(&mut self, description: &str, err: &str) -> Command<Message> {
        error!("{}: {}", description, err);
        let id = self.notifier.show(description, err);
        Command::perform(async move { tokio::time::sleep(NOTIFICATION_TIMEOUT).await }, move |_| {
            Message::DismissNotification(id)
        })
    }

    fn reload(&self, collection: Collection) -> Command<Message> {
        let store = self.store.clone();
        Command::perform(
            async move { table::load(&*store, collection).await.map_err(|e| e.to_string()) },
            move |result| Message::Reloaded(collection, result),
        )
    }

    fn mutate<F>(&self, collection: Collection, action: TableAction, op: F) -> Command<Message>
    where
        F: std::future::Future<Output = crate::error::AppResult<Vec<Record>>> + Send + 'static,
    {
        Command::perform(async move { op.await.map_err(|e| e.to_string()) }, move |result| {
            Message::TableChanged {
                collection,
                action,
                result,
            }
        })
    }
}

impl Application for JamiiApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = (Arc<Backend>, String);

    fn new((store, user_id): Self::Flags) -> (Self, Command<Message>) {
        let mut ui_state = UiState::new();
        ui_state.status = store.label().to_string();

        let app = JamiiApp {
            store,
            user_id,
            ui_state,
            notifier: Notifier::new(),
            family: RecordTable::new(Collection::Family),
            meetings: RecordTable::new(Collection::Meetings),
            michango: RecordTable::new(Collection::Michango),
            calendar: CalendarState::starting_at(chrono::Local::now().date_naive()),
            zoom: None,
        };

        // Family, then meetings, then michango.
        let store = app.store.clone();
        let startup_command = Command::perform(
            async move {
                let mut loaded = Vec::new();
                for collection in Collection::ALL {
                    let result = table::load(&*store, collection).await.map_err(|e| e.to_string());
                    loaded.push((collection, result));
                }
                loaded
            },
            Message::DataLoaded,
        );

        (app, startup_command)
    }

    fn title(&self) -> String {
        "Jamii".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ShowView(view) => {
                self.ui_state.current_view = view;
                Command::none()
            }
            Message::DataLoaded(loaded) => {
                let mut commands = Vec::new();
                for (collection, result) in loaded {
                    match result {
                        Ok(rows) => self.apply_rows(collection, rows),
                        Err(e) => commands.push(self.notify(&format!("Failed to load {}", collection), &e)),
                    }
                }
                if self.zoom.is_none() {
                    self.zoom = Some(ZoomListing::default());
                }
                Command::batch(commands)
            }

            Message::CalendarNavigate(delta) => {
                self.calendar.navigate(delta);
                Command::none()
            }
            Message::CalendarSelectDate(date) => {
                self.calendar.select_date(&date);
                Command::none()
            }
            Message::CalendarCloseModal => {
                self.calendar.close_modal();
                Command::none()
            }
            Message::CalendarDraftChanged(field, value) => {
                self.calendar.edit_draft(field, value);
                Command::none()
            }
            Message::CalendarSubmit => {
                let Some(meeting) = self.calendar.submit(Some(self.user_id.as_str())) else {
                    return Command::none();
                };
                info!("Saving meeting on {}", meeting.date);
                let store = self.store.clone();
                Command::perform(
                    async move {
                        table::add_row(&*store, Collection::Meetings, meeting.to_fields(), meeting.owner)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::MeetingSaved,
                )
            }
            Message::MeetingSaved(result) => match result {
                Ok(rows) => {
                    self.apply_rows(Collection::Meetings, rows);
                    Command::none()
                }
                Err(e) => {
                    // The optimistic entry is dropped by the reload.
                    let banner = self.notify(&TableAction::Add.failure(Collection::Meetings), &e);
                    Command::batch(vec![banner, self.reload(Collection::Meetings)])
                }
            },

            Message::AddRow(collection) => {
                let store = self.store.clone();
                let owner = Some(self.user_id.clone());
                self.mutate(collection, TableAction::Add, async move {
                    table::add_blank_row(&*store, collection, owner).await
                })
            }
            Message::EditField {
                collection,
                id,
                field,
                value,
            } => {
                self.table_mut(collection).edit(id, field, value);
                Command::none()
            }
            Message::CommitField { collection, id, field } => {
                if let Err(e) = self.table(collection).check_editable(id, &self.user_id) {
                    self.table_mut(collection).take_edit(id, field);
                    return self.notify(&TableAction::Update.failure(collection), &e.to_string());
                }
                let Some(value) = self.table_mut(collection).take_edit(id, field) else {
                    return Command::none();
                };
                let store = self.store.clone();
                self.mutate(collection, TableAction::Update, async move {
                    table::update_row(&*store, collection, id, field, &value).await
                })
            }
            Message::RemoveRow(collection, id) => {
                if let Err(e) = self.table(collection).check_editable(id, &self.user_id) {
                    return self.notify(&TableAction::Remove.failure(collection), &e.to_string());
                }
                let store = self.store.clone();
                self.mutate(collection, TableAction::Remove, async move {
                    table::remove_row(&*store, collection, id).await
                })
            }
            Message::TableChanged {
                collection,
                action,
                result,
            } => match result {
                Ok(rows) => {
                    self.apply_rows(collection, rows);
                    Command::none()
                }
                Err(e) => {
                    let banner = self.notify(&action.failure(collection), &e);
                    Command::batch(vec![banner, self.reload(collection)])
                }
            },
            Message::Reloaded(collection, result) => match result {
                Ok(rows) => {
                    self.apply_rows(collection, rows);
                    Command::none()
                }
                Err(e) => {
                    // Fall back to the last rows the store confirmed.
                    if collection == Collection::Meetings {
                        let confirmed = self.meetings.rows().iter().map(Meeting::from).collect();
                        self.calendar.set_meetings(confirmed);
                    }
                    self.notify(&format!("Failed to load {}", collection), &e)
                }
            },

            Message::DismissNotification(id) => {
                self.notifier.dismiss(id);
                Command::none()
            }
            Message::CopyUserId => {
                self.ui_state.copied = true;
                Command::batch(vec![
                    iced::clipboard::write(self.user_id.clone()),
                    Command::perform(async { tokio::time::sleep(COPY_FEEDBACK_TIMEOUT).await }, |_| {
                        Message::CopyFeedbackExpired
                    }),
                ])
            }
            Message::CopyFeedbackExpired => {
                self.ui_state.copied = false;
                Command::none()
            }
            Message::JoinMeeting(url) => {
                info!("Opening meeting URL: {}", url);
                open_url(&url);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page: Element<Message> = match self.ui_state.current_view {
            View::Family => ui::tables::view(&self.family, &self.user_id),
            View::Meetings => ui::tables::view(&self.meetings, &self.user_id),
            View::Michango => ui::tables::view(&self.michango, &self.user_id),
            View::Calendar => ui::calendar::view(&self.calendar, chrono::Local::now().date_naive()),
            View::ZoomLinks => match &self.zoom {
                Some(listing) => ui::zoom::view(listing),
                None => ui::muted("Loading...").into(),
            },
        };

        let mut content = column![].spacing(16);
        if let Some(notification) = self.notifier.current() {
            content = content.push(ui::banner(notification));
        }
        content = content.push(page);

        container(row![
            ui::sidebar(&self.ui_state, &self.user_id),
            container(content).width(Length::Fill).height(Length::Fill).padding(40),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(BackgroundStyle)))
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd").arg("/C").arg("start").arg(url).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = std::process::Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = spawned {
        warn!("Failed to open {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DraftField;
    use crate::models::Fields;
    use crate::store::{LocalStore, RecordStore};
    use tempfile::TempDir;

    async fn open_app(dir: &TempDir, user_id: &str) -> (JamiiApp, Arc<Backend>) {
        let store = LocalStore::open(&dir.path().join("records.json")).await.unwrap();
        let backend = Arc::new(Backend::Local(store));
        let (app, _) = JamiiApp::new((backend.clone(), user_id.to_string()));
        (app, backend)
    }

    async fn load_all(app: &mut JamiiApp, store: &Backend) {
        let mut loaded = Vec::new();
        for collection in Collection::ALL {
            loaded.push((collection, table::load(store, collection).await.map_err(|e| e.to_string())));
        }
        let _ = app.update(Message::DataLoaded(loaded));
    }

    async fn seed(store: &Backend, collection: Collection, pairs: &[(&str, &str)], owner: &str) -> Vec<Record> {
        let fields: Fields = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        table::add_row(store, collection, fields, Some(owner.to_string())).await.unwrap()
    }

    fn banner(app: &JamiiApp) -> Option<&str> {
        app.notifier.current().map(|n| n.message.as_str())
    }

    fn submit_meeting(app: &mut JamiiApp, date: &str, agenda: &str) {
        let _ = app.update(Message::CalendarSelectDate(date.to_string()));
        let _ = app.update(Message::CalendarDraftChanged(DraftField::Agenda, agenda.to_string()));
        let _ = app.update(Message::CalendarDraftChanged(DraftField::Decisions, "Approved".to_string()));
        let _ = app.update(Message::CalendarSubmit);
    }

    #[tokio::test]
    async fn test_failed_meeting_save_shows_banner_and_reload_reconciles() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        seed(&store, Collection::Meetings, &[("date", "2024-03-05"), ("agenda", "Harambee")], "other").await;
        load_all(&mut app, &store).await;

        submit_meeting(&mut app, "2024-03-20", "Budget review");
        assert_eq!(app.calendar.meetings().len(), 2);
        assert_eq!(app.calendar.modal_meetings().len(), 1);

        let _ = app.update(Message::MeetingSaved(Err("disk full".to_string())));
        assert_eq!(banner(&app), Some("Failed to add meeting: disk full"));

        let rows = table::load(&*store, Collection::Meetings).await.map_err(|e| e.to_string());
        let _ = app.update(Message::Reloaded(Collection::Meetings, rows));
        assert_eq!(app.calendar.meetings().len(), 1);
        assert!(app.calendar.modal_meetings().is_empty());
        assert_eq!(app.calendar.selected_date(), Some("2024-03-20"));
    }

    #[tokio::test]
    async fn test_failed_reconcile_reload_is_reported() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        seed(&store, Collection::Meetings, &[("date", "2024-03-05"), ("agenda", "Harambee")], "other").await;
        load_all(&mut app, &store).await;

        submit_meeting(&mut app, "2024-03-20", "Budget review");
        let _ = app.update(Message::MeetingSaved(Err("disk full".to_string())));
        let _ = app.update(Message::Reloaded(Collection::Meetings, Err("store locked".to_string())));

        assert_eq!(banner(&app), Some("Failed to load meetings: store locked"));
        let dates: Vec<_> = app.calendar.meetings().iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-05"]);
    }

    #[tokio::test]
    async fn test_owner_commit_is_sent_without_banner() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        let rows = seed(&store, Collection::Family, &[("name", "Asha")], "me").await;
        load_all(&mut app, &store).await;
        let id = rows[0].id;

        let _ = app.update(Message::EditField {
            collection: Collection::Family,
            id,
            field: "name",
            value: "Asha M.".to_string(),
        });
        assert_eq!(app.family.value_of(&app.family.rows()[0], "name"), "Asha M.");

        let _ = app.update(Message::CommitField {
            collection: Collection::Family,
            id,
            field: "name",
        });
        assert!(banner(&app).is_none());
        // The pending edit was handed to the store command.
        assert_eq!(app.family.value_of(&app.family.rows()[0], "name"), "Asha");
    }

    #[tokio::test]
    async fn test_changes_to_others_rows_are_refused() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        let rows = seed(&store, Collection::Family, &[("name", "Juma")], "someone-else").await;
        load_all(&mut app, &store).await;
        let id = rows[0].id;

        let _ = app.update(Message::EditField {
            collection: Collection::Family,
            id,
            field: "name",
            value: "Changed".to_string(),
        });
        let _ = app.update(Message::CommitField {
            collection: Collection::Family,
            id,
            field: "name",
        });
        assert_eq!(
            banner(&app),
            Some("Failed to update family member: Permission denied: only the creator can change this family member")
        );
        assert_eq!(app.family.value_of(&app.family.rows()[0], "name"), "Juma");

        let _ = app.update(Message::RemoveRow(Collection::Family, id));
        assert_eq!(
            banner(&app),
            Some("Failed to remove family member: Permission denied: only the creator can change this family member")
        );
        assert_eq!(app.family.rows().len(), 1);

        let stored = store.list_all(Collection::Family).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get("name"), "Juma");
    }

    #[tokio::test]
    async fn test_zoom_listing_is_taken_once() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        seed(
            &store,
            Collection::Meetings,
            &[("date", "2024-03-05"), ("agenda", "Harambee"), ("zoom", "https://zoom.us/j/1")],
            "me",
        )
        .await;
        load_all(&mut app, &store).await;
        assert_eq!(app.zoom.as_ref().unwrap().entries().len(), 1);

        let rows = seed(
            &store,
            Collection::Meetings,
            &[("date", "2024-03-06"), ("agenda", "Follow up"), ("zoom", "https://meet.google.com/abc")],
            "me",
        )
        .await;
        let _ = app.update(Message::TableChanged {
            collection: Collection::Meetings,
            action: TableAction::Add,
            result: Ok(rows),
        });

        assert_eq!(app.calendar.meetings().len(), 2);
        assert_eq!(app.zoom.as_ref().unwrap().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_meetings_load_leaves_empty_listing() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = open_app(&dir, "me").await;
        let _ = app.update(Message::DataLoaded(vec![
            (Collection::Family, Ok(Vec::new())),
            (Collection::Meetings, Err("boom".to_string())),
            (Collection::Michango, Ok(Vec::new())),
        ]));
        assert_eq!(banner(&app), Some("Failed to load meetings: boom"));
        assert!(app.zoom.as_ref().unwrap().is_empty());

        let rows = seed(
            &store,
            Collection::Meetings,
            &[("date", "2024-03-05"), ("zoom", "https://zoom.us/j/1")],
            "me",
        )
        .await;
        let _ = app.update(Message::Reloaded(Collection::Meetings, Ok(rows)));
        assert_eq!(app.calendar.meetings().len(), 1);
        assert!(app.zoom.as_ref().unwrap().is_empty());
    }
}
