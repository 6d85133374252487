use std::time::Duration;

use gtk::prelude::*;
use gtk::{Box as GtkBox, Button, Image, Label, Orientation, Revealer};
use relm4::prelude::*;

const SUCCESS_TIMEOUT: Duration = Duration::from_secs(3);
const ERROR_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "emblem-ok-symbolic",
            NotificationKind::Error => "dialog-error-symbolic",
        }
    }

    fn timeout(&self) -> Duration {
        match self {
            NotificationKind::Success => SUCCESS_TIMEOUT,
            NotificationKind::Error => ERROR_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub enum NotificationBarMsg {
    Show { kind: NotificationKind, text: String },
    Dismiss,
}

#[derive(Debug)]
pub enum NotificationBarCmdMsg {
    Expired { generation: u64 },
}

/// Transient, dismissable message strip. A newer message replaces the shown
/// one and restarts the hide timer.
#[tracker::track]
pub struct NotificationBarModel {
    text: String,
    kind: NotificationKind,
    revealed: bool,
    #[do_not_track]
    generation: u64,
}

#[relm4::component(pub)]
impl Component for NotificationBarModel {
    type Init = ();
    type Input = NotificationBarMsg;
    type Output = ();
    type CommandOutput = NotificationBarCmdMsg;

    view! {
        #[root]
        Revealer {
            set_transition_type: gtk::RevealerTransitionType::SlideUp,
            #[track(model.changed(NotificationBarModel::revealed()))]
            set_reveal_child: model.revealed,

            GtkBox {
                set_orientation: Orientation::Horizontal,
                set_spacing: 8,
                set_margin_all: 6,
                #[track(model.changed(NotificationBarModel::kind()))]
                set_css_classes: &["notification", model.kind.css_class()],

                Image {
                    #[track(model.changed(NotificationBarModel::kind()))]
                    set_icon_name: Some(model.kind.icon_name()),
                },

                Label {
                    set_hexpand: true,
                    set_xalign: 0.0,
                    set_wrap: true,
                    #[track(model.changed(NotificationBarModel::text()))]
                    set_label: &model.text,
                },

                Button {
                    set_icon_name: "window-close-symbolic",
                    set_tooltip_text: Some("Dismiss"),
                    add_css_class: "flat",
                    connect_clicked => NotificationBarMsg::Dismiss,
                },
            }
        }
    }

    fn init(_init: (), root: Self::Root, sender: ComponentSender<Self>) -> ComponentParts<Self> {
        let model = NotificationBarModel {
            text: String::new(),
            kind: NotificationKind::Success,
            revealed: false,
            generation: 0,
            tracker: 0,
        };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        self.reset();

        match msg {
            NotificationBarMsg::Show { kind, text } => {
                self.set_kind(kind);
                self.set_text(text);
                self.set_revealed(true);
                self.generation += 1;

                let generation = self.generation;
                let timeout = kind.timeout();
                sender.oneshot_command(async move {
                    async_std::task::sleep(timeout).await;
                    NotificationBarCmdMsg::Expired { generation }
                });
            }
            NotificationBarMsg::Dismiss => {
                self.set_revealed(false);
            }
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        self.reset();

        match message {
            NotificationBarCmdMsg::Expired { generation } if generation == self.generation => {
                self.set_revealed(false);
            }
            NotificationBarCmdMsg::Expired { .. } => {}
        }
    }
}
