use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub kind: FieldKind,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

/// A required, controlled input with an optional label
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let input = html! {
        <input
            class="form-input"
            id={props.name.clone()}
            name={props.name.clone()}
            type={props.kind.input_type()}
            value={props.value.clone()}
            oninput={props.oninput.clone()}
            placeholder={props.placeholder.clone()}
            required=true
        />
    };

    match &props.label {
        Some(label) => html! {
            <div class="form-group">
                <label for={props.name.clone()}>{label}</label>
                {input}
            </div>
        },
        None => input,
    }
}
