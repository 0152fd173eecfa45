// ABOUTME: Handlebars helper functions available to bundled templates
// ABOUTME: Only pure string transforms are registered so rendering stays deterministic

use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError};
use heck::{ToKebabCase, ToPascalCase, ToSnakeCase};
use serde_json::Value;

fn string_param<'a>(h: &'a Helper, index: usize, helper: &str) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| {
            RenderError::new(format!(
                "{} helper requires a string parameter at position {}",
                helper, index
            ))
        })
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = string_param(h, 0, "upper")?;
    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = string_param(h, 0, "lower")?;
    out.write(&input.to_lowercase())?;
    Ok(())
}

/// snake_case helper, e.g. for Go package names derived from the project name
pub fn snake_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = string_param(h, 0, "snake_case")?;
    out.write(&input.to_snake_case())?;
    Ok(())
}

pub fn pascal_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = string_param(h, 0, "pascal_case")?;
    out.write(&input.to_pascal_case())?;
    Ok(())
}

pub fn kebab_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = string_param(h, 0, "kebab_case")?;
    out.write(&input.to_kebab_case())?;
    Ok(())
}

/// Default helper - provides default value if the first parameter is missing, null or empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = match h.param(0).map(|v| v.value()) {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(RenderError::new(
                "default helper requires a string or null parameter at position 0",
            ))
        }
    };
    let default_value = string_param(h, 1, "default")?;

    let result = if value.is_empty() {
        default_value
    } else {
        value
    };

    out.write(result)?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("snake_case", Box::new(snake_case_helper));
    handlebars.register_helper("pascal_case", Box::new(pascal_case_helper));
    handlebars.register_helper("kebab_case", Box::new(kebab_case_helper));
    handlebars.register_helper("default", Box::new(default_helper));
}
