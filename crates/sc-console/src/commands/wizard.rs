//! Line-oriented driver for any wizard flow.
//!
//! One prompt per field of the current step. After the last field the
//! driver advances (or submits on the final step) and re-renders whatever
//! the controller reports: inline field errors, the form-level banner or
//! the next step.

use std::io::{BufRead, Write};

use anyhow::Context;
use sc_app::WizardController;
use sc_core::form::{FieldKind, FieldSchema, FieldValue, Requirement};
use sc_core::wizard::{WizardError, WizardSnapshot};

const HINT: &str =
    "Enter keeps the current value. Type :back for the previous step, :clear to empty a field, :quit to stop.";

/// Select fields with more options than this list them on `?` only.
const INLINE_OPTION_LIMIT: usize = 6;

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(WizardSnapshot),
    /// The user quit or input ran out. Entries stay in the draft, if enabled.
    Abandoned(WizardSnapshot),
}

enum FieldInput {
    Set(FieldValue),
    Keep,
    Back,
    Quit,
}

pub async fn run_wizard<R, W>(
    controller: &WizardController,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<WizardOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{HINT}")?;

    'steps: loop {
        let snapshot = controller.snapshot().await;
        if snapshot.is_completed() {
            return Ok(WizardOutcome::Completed(snapshot));
        }
        render_header(&snapshot, out)?;

        let step = controller
            .definition()
            .step(snapshot.step)
            .with_context(|| format!("wizard has no step {}", snapshot.step))?
            .clone();

        for field in &step.fields {
            if let Some(message) = snapshot.errors.message(&field.name) {
                writeln!(out, "  ! {message}")?;
            }
            let current = controller
                .definition()
                .effective_values(&controller.snapshot().await.values)
                .get(&field.name)
                .cloned();

            match read_field(field, current.as_ref(), input, out)? {
                FieldInput::Set(value) => {
                    controller.set_field_value(field.name.clone(), value).await;
                }
                FieldInput::Keep => {}
                FieldInput::Back => {
                    if let Err(err) = controller.retreat().await {
                        writeln!(out, "  ! {err}")?;
                    }
                    continue 'steps;
                }
                FieldInput::Quit => {
                    return Ok(WizardOutcome::Abandoned(controller.snapshot().await));
                }
            }
        }

        let result = if snapshot.is_final_step() {
            writeln!(out, "Submitting...")?;
            controller.submit().await
        } else {
            controller.advance().await
        };
        match result {
            Ok(_) => {}
            // Shown as the banner on the next render.
            Err(WizardError::Rejected(_) | WizardError::Network(_) | WizardError::TimedOut) => {}
            Err(err) => writeln!(out, "  ! {err}")?,
        }
    }
}

fn render_header<W: Write>(snapshot: &WizardSnapshot, out: &mut W) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "== Step {} of {}: {} ==",
        snapshot.step, snapshot.step_count, snapshot.step_title
    )?;
    if let Some(form_error) = &snapshot.form_error {
        writeln!(out, "!! {form_error}")?;
    }
    Ok(())
}

/// Prompts until the answer is usable for `field`.
fn read_field<R, W>(
    field: &FieldSchema,
    current: Option<&FieldValue>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<FieldInput>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}: ", prompt_for(field, current))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(FieldInput::Quit);
        }

        match line.trim() {
            ":quit" => return Ok(FieldInput::Quit),
            ":back" => return Ok(FieldInput::Back),
            ":clear" => return Ok(FieldInput::Set(blank_value(field.kind))),
            "?" if field.kind == FieldKind::Select => {
                writeln!(out, "  Options: {}", field.options.join(", "))?;
            }
            raw => match parse_answer(field, raw) {
                Ok(Some(value)) => return Ok(FieldInput::Set(value)),
                Ok(None) => return Ok(FieldInput::Keep),
                Err(hint) => writeln!(out, "  ! {hint}")?,
            },
        }
    }
}

fn blank_value(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::Checkbox => FieldValue::Flag(false),
        _ => FieldValue::text(""),
    }
}

fn prompt_for(field: &FieldSchema, current: Option<&FieldValue>) -> String {
    let mut prompt = field.label.clone();
    if field.requirement == Requirement::Always {
        prompt.push('*');
    }

    match field.kind {
        FieldKind::Checkbox => prompt.push_str(" [y/n]"),
        FieldKind::Select if field.options.len() <= INLINE_OPTION_LIMIT => {
            prompt.push_str(&format!(" ({})", field.options.join("/")));
        }
        FieldKind::Select => prompt.push_str(" (? lists options)"),
        FieldKind::Date => prompt.push_str(" (YYYY-MM-DD)"),
        _ => {}
    }

    match current.filter(|value| !value.is_blank()) {
        Some(_) if field.is_sensitive() => prompt.push_str(" [set]"),
        Some(FieldValue::Flag(flag)) => {
            prompt.push_str(if *flag { " [yes]" } else { " [no]" });
        }
        Some(FieldValue::Text(text)) => prompt.push_str(&format!(" [{text}]")),
        None => {}
    }
    prompt
}

/// `Ok(None)` keeps the current value; `Err` carries a re-prompt hint.
fn parse_answer(field: &FieldSchema, raw: &str) -> Result<Option<FieldValue>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    match field.kind {
        FieldKind::Checkbox => match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Ok(Some(FieldValue::Flag(true))),
            "n" | "no" | "false" | "0" => Ok(Some(FieldValue::Flag(false))),
            _ => Err("Please answer y or n.".to_string()),
        },
        FieldKind::Select => Ok(Some(FieldValue::text(resolve_option(field, raw)))),
        _ => Ok(Some(FieldValue::text(raw))),
    }
}

/// Accepts a 1-based option number or a case-insensitive option value.
/// Anything else is passed through for validation to report.
fn resolve_option(field: &FieldSchema, raw: &str) -> String {
    if let Some(option) = raw
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| field.options.get(index))
    {
        return option.clone();
    }
    field
        .options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(raw))
        .cloned()
        .unwrap_or_else(|| raw.to_string())
}
