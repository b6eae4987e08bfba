use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
}

/// Handle for raising notifications from any component below
/// [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    nextId: StoredValue<u64>,
}

impl ToastContext {
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title.into(), message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push("Erreur".into(), message.into(), ToastLevel::Error);
    }

    fn push(&self, title: String, message: String, level: ToastLevel) {
        let id = self.nextId.get_value();
        self.nextId.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title,
                message,
                level,
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            std::time::Duration::from_secs(5),
        );
    }
}

fn toast_class(level: &ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast-success",
        ToastLevel::Error => "toast toast-error",
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides the toast context and renders the stack. Mount once at the root.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        nextId: StoredValue::new(0),
    };
    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-container">
            <For each=move || ctx.toasts.get() key=|toast| toast.id let:toast>
                <div class=toast_class(&toast.level)>
                    <strong class="toast-title">{toast.title.clone()}</strong>
                    <span class="toast-message">{toast.message.clone()}</span>
                </div>
            </For>
        </div>
    }
}
