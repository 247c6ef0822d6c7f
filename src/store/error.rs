//! Error types for item store operations

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, describe_table::DescribeTableError, get_item::GetItemError,
    put_item::PutItemError, update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type for item store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the item store
///
/// The display text carries the full SDK error context, since it is
/// returned verbatim as the response body.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to get item from DynamoDB: {}", DisplayErrorContext(.0))]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    #[error("Failed to put item into DynamoDB: {}", DisplayErrorContext(.0))]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    #[error("Failed to update item in DynamoDB: {}", DisplayErrorContext(.0))]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    #[error("Failed to delete item from DynamoDB: {}", DisplayErrorContext(.0))]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    #[error("Failed to describe DynamoDB table: {}", DisplayErrorContext(.0))]
    DynamoDbDescribeTableError(#[from] SdkError<DescribeTableError>),

    /// `serde_dynamo` could not convert between `Item` and an attribute map
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
