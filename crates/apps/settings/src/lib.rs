//! System Settings mockup: a sidebar of preference sections and a detail pane
//! of decorative controls. Every control mutates only window-local signals.

use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsSection {
    WiFi,
    Bluetooth,
    Network,
    General,
    Appearance,
    Accessibility,
    Displays,
    Sound,
}

impl SettingsSection {
    const ALL: [SettingsSection; 8] = [
        Self::WiFi,
        Self::Bluetooth,
        Self::Network,
        Self::General,
        Self::Appearance,
        Self::Accessibility,
        Self::Displays,
        Self::Sound,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::WiFi => "Wi-Fi",
            Self::Bluetooth => "Bluetooth",
            Self::Network => "Network",
            Self::General => "General",
            Self::Appearance => "Appearance",
            Self::Accessibility => "Accessibility",
            Self::Displays => "Displays",
            Self::Sound => "Sound",
        }
    }
}

#[component]
pub fn SettingsApp() -> impl IntoView {
    let section = create_rw_signal(SettingsSection::Appearance);
    let search = create_rw_signal(String::new());
    let wifi_enabled = create_rw_signal(true);
    let bluetooth_enabled = create_rw_signal(true);
    let dark_mode = create_rw_signal(false);
    let accent = create_rw_signal("blue".to_string());
    let reduce_motion = create_rw_signal(false);
    let increase_contrast = create_rw_signal(false);
    let brightness = create_rw_signal(70);
    let volume = create_rw_signal(55);

    view! {
        <div class="app app-settings">
            <Pane layout_class="settings-sidebar" aria_label="Settings sections">
                <div class="settings-profile">
                    <span class="settings-avatar" aria-hidden="true"></span>
                    <span class="settings-profile-copy">
                        <strong>"User Name"</strong>
                        <small>"Apple ID, iCloud+"</small>
                    </span>
                </div>
                <TextField
                    value=search
                    on_input=Callback::new(move |value| search.set(value))
                    placeholder="Search"
                    aria_label="Search settings"
                    layout_class="settings-search"
                />
                <Tree aria_label="Sections">
                    {SettingsSection::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <TreeItem
                                    label=entry.label()
                                    selected=Signal::derive(move || section.get() == entry)
                                    on_select=Callback::new(move |_| section.set(entry))
                                />
                            }
                        })
                        .collect_view()}
                </Tree>
            </Pane>

            <Pane layout_class="settings-detail" aria_label="Section detail">
                <h2 class="settings-detail-title">{move || section.get().label()}</h2>
                {move || match section.get() {
                    SettingsSection::WiFi => view! {
                        <div class="settings-group">
                            <ToggleRow
                                label="Wi-Fi"
                                checked=wifi_enabled
                                on_toggle=Callback::new(move |value| wifi_enabled.set(value))
                            />
                            <div class="settings-row">
                                <span>"Home Network"</span>
                                <small>"Connected"</small>
                            </div>
                            <div class="settings-row">
                                <span>"Coffee-Shop-5G"</span>
                                <small>"Secured"</small>
                            </div>
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Bluetooth => view! {
                        <div class="settings-group">
                            <ToggleRow
                                label="Bluetooth"
                                checked=bluetooth_enabled
                                on_toggle=Callback::new(move |value| bluetooth_enabled.set(value))
                            />
                            <div class="settings-row">
                                <span>"AirPods Pro"</span>
                                <small>"Connected"</small>
                            </div>
                            <div class="settings-row">
                                <span>"Magic Trackpad"</span>
                                <small>"Not Connected"</small>
                            </div>
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Appearance => view! {
                        <div class="settings-group">
                            <ToggleRow
                                label="Dark Mode"
                                checked=dark_mode
                                on_toggle=Callback::new(move |value| dark_mode.set(value))
                            />
                            <SelectField
                                label="Accent color"
                                options=&[
                                    ("blue", "Blue"),
                                    ("purple", "Purple"),
                                    ("pink", "Pink"),
                                    ("orange", "Orange"),
                                    ("green", "Green"),
                                ]
                                value=accent
                                on_change=Callback::new(move |value| accent.set(value))
                            />
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Accessibility => view! {
                        <div class="settings-group">
                            <ToggleRow
                                label="Reduce Motion"
                                checked=reduce_motion
                                on_toggle=Callback::new(move |value| reduce_motion.set(value))
                            />
                            <ToggleRow
                                label="Increase Contrast"
                                checked=increase_contrast
                                on_toggle=Callback::new(move |value| increase_contrast.set(value))
                            />
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Displays => view! {
                        <div class="settings-group">
                            <RangeField
                                label="Brightness"
                                min=0
                                max=100
                                value=brightness
                                on_input=Callback::new(move |value| brightness.set(value))
                            />
                            <div class="settings-row">
                                <span>"Built-in Display"</span>
                                <small>"Color LCD, 2560 x 1600"</small>
                            </div>
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Sound => view! {
                        <div class="settings-group">
                            <RangeField
                                label="Output volume"
                                min=0
                                max=100
                                value=volume
                                on_input=Callback::new(move |value| volume.set(value))
                            />
                            <div class="settings-row">
                                <span>"Output device"</span>
                                <small>"MacBook Pro Speakers"</small>
                            </div>
                        </div>
                    }
                    .into_view(),
                    SettingsSection::Network | SettingsSection::General => view! {
                        <div class="settings-group">
                            <div class="settings-row">
                                <span>"About"</span>
                                <small>"MacBook Pro, 14-inch"</small>
                            </div>
                            <div class="settings-row">
                                <span>"Software Update"</span>
                                <small>"Up to date"</small>
                            </div>
                            <div class="settings-row">
                                <span>"Storage"</span>
                                <small>"84.21 GB available"</small>
                            </div>
                        </div>
                    }
                    .into_view(),
                }}
            </Pane>
        </div>
    }
}
