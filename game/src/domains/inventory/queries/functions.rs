use crate::inventory::{Function, InventoryError};

pub trait FunctionsQuery {
    fn as_equippable(&self) -> Result<usize, InventoryError>;
    fn as_attachable(&self) -> Result<usize, InventoryError>;
    fn as_attachments(&self) -> Result<Vec<usize>, InventoryError>;
}

impl FunctionsQuery for Vec<Function> {
    fn as_equippable(&self) -> Result<usize, InventoryError> {
        for function in self {
            if let Function::Equippable(equipment) = function {
                return Ok(*equipment);
            }
        }
        Err(InventoryError::ItemFunctionNotFound)
    }

    fn as_attachable(&self) -> Result<usize, InventoryError> {
        for function in self {
            if let Function::Attachable(attachment) = function {
                return Ok(*attachment);
            }
        }
        Err(InventoryError::ItemFunctionNotFound)
    }

    fn as_attachments(&self) -> Result<Vec<usize>, InventoryError> {
        for function in self {
            if let Function::Attachments(items) = function {
                return Ok(items.clone());
            }
        }
        Err(InventoryError::ItemFunctionNotFound)
    }
}
