use dioxus::prelude::*;

use crate::api::{ApiClient, FilePayload, NewProjectForm};
use crate::core::session::{try_use_session, ActiveProject};

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Working,
    Created { id: String, name: String },
    Error(String),
}

/// Project creation form. Submitting creates the project on the backend and
/// immediately starts processing; on success the new project becomes the
/// session's active project so the Results view picks it up.
#[component]
pub fn NewProject() -> Element {
    let mut project_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut old_base_url = use_signal(String::new);
    let mut new_base_url = use_signal(String::new);

    let old_sitemap = use_signal(|| Option::<FilePayload>::None);
    let new_sitemap = use_signal(|| Option::<FilePayload>::None);
    let gsc_export = use_signal(|| Option::<FilePayload>::None);
    let redirect_mapping = use_signal(|| Option::<FilePayload>::None);

    let mut status = use_signal(|| SubmitStatus::Idle);
    let session = try_use_session();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Working {
            return;
        }

        let form = NewProjectForm {
            project_name: project_name(),
            description: description(),
            old_base_url: old_base_url(),
            new_base_url: new_base_url(),
            old_sitemap: old_sitemap(),
            new_sitemap: new_sitemap(),
            gsc_export: gsc_export(),
            redirect_mapping: redirect_mapping(),
        };

        if let Err(err) = form.validate() {
            status.set(SubmitStatus::Error(err.to_string()));
            return;
        }

        status.set(SubmitStatus::Working);
        spawn(async move {
            let client = ApiClient::from_env();
            match client.create_and_start(&form).await {
                Ok(created) => {
                    let name = created
                        .project_name
                        .clone()
                        .unwrap_or_else(|| form.project_name.clone());
                    if let Some(mut session) = session {
                        session.set(Some(ActiveProject {
                            id: created.id.clone(),
                            name: name.clone(),
                        }));
                    }
                    status.set(SubmitStatus::Created {
                        id: created.id,
                        name,
                    });
                }
                Err(err) => {
                    status.set(SubmitStatus::Error(err.to_string()));
                }
            }
        });
    };

    let working = status() == SubmitStatus::Working;

    let status_node = match status() {
        SubmitStatus::Idle | SubmitStatus::Working => rsx! {},
        SubmitStatus::Created { id, name } => rsx! {
            div { class: "insight insight--good",
                "✅ Audit started for \"{name}\" (project {id}). "
                "Head to Results to watch progress."
            }
        },
        SubmitStatus::Error(message) => rsx! {
            div { class: "insight insight--warn", "⚠️ {message}" }
        },
    };

    rsx! {
        section { class: "page page-new-project",
            h1 { "New Migration Audit" }

            form { class: "project-form", onsubmit: submit,
                div { class: "project-form__field",
                    label { r#for: "project-name", "Project name" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        value: "{project_name}",
                        oninput: move |evt| project_name.set(evt.value()),
                    }
                }
                div { class: "project-form__field",
                    label { r#for: "description", "Description (optional)" }
                    input {
                        id: "description",
                        r#type: "text",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div { class: "project-form__field",
                    label { r#for: "old-base-url", "Old site base URL" }
                    input {
                        id: "old-base-url",
                        r#type: "url",
                        placeholder: "https://old.example.com",
                        value: "{old_base_url}",
                        oninput: move |evt| old_base_url.set(evt.value()),
                    }
                }
                div { class: "project-form__field",
                    label { r#for: "new-base-url", "New site base URL" }
                    input {
                        id: "new-base-url",
                        r#type: "url",
                        placeholder: "https://www.example.com",
                        value: "{new_base_url}",
                        oninput: move |evt| new_base_url.set(evt.value()),
                    }
                }

                FileField {
                    id: "old-sitemap",
                    label: "Old site sitemap (XML)",
                    accept: ".xml",
                    slot: old_sitemap,
                }
                FileField {
                    id: "new-sitemap",
                    label: "New site sitemap (XML)",
                    accept: ".xml",
                    slot: new_sitemap,
                }
                FileField {
                    id: "gsc-export",
                    label: "Search Console export (CSV, optional)",
                    accept: ".csv",
                    slot: gsc_export,
                }
                FileField {
                    id: "redirect-mapping",
                    label: "Redirect mapping (CSV, optional)",
                    accept: ".csv",
                    slot: redirect_mapping,
                }

                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: working,
                    if working { "Creating project…" } else { "Create and start audit" }
                }
            }

            {status_node}
        }
    }
}

/// One file picker wired to a `FilePayload` slot. The browser hands the file
/// over asynchronously, so reading happens in a spawned task that fills the
/// slot when the bytes arrive.
#[component]
fn FileField(
    id: &'static str,
    label: &'static str,
    accept: &'static str,
    slot: Signal<Option<FilePayload>>,
) -> Element {
    let picked = slot().map(|payload| payload.file_name);

    rsx! {
        div { class: "project-form__field project-form__field--file",
            label { r#for: id, "{label}" }
            input {
                id,
                r#type: "file",
                accept,
                onchange: move |evt| {
                    let mut slot = slot;
                    if let Some(file_engine) = evt.files() {
                        let names = file_engine.files();
                        let Some(name) = names.first().cloned() else {
                            slot.set(None);
                            return;
                        };
                        spawn(async move {
                            if let Some(bytes) = file_engine.read_file(&name).await {
                                slot.set(Some(FilePayload {
                                    file_name: name,
                                    bytes,
                                }));
                            }
                        });
                    }
                },
            }
            if let Some(name) = picked {
                span { class: "project-form__picked", "Selected: {name}" }
            }
        }
    }
}
