use aide::{OperationInput, generate::GenContext, openapi::Operation};
use axum::extract::FromRequest;
use schemars::JsonSchema;

use crate::error::ApiError;

/// `axum::Json` whose rejections are answered with the `ApiError` envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: JsonSchema> OperationInput for ApiJson<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::Json::<T>::operation_input(ctx, operation);
    }
}
