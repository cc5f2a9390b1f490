pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::materials::requests::{CreateMaterialRequest, MaterialListParams};
use crate::storage::Storage;

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 上传课程资料记录
    pub async fn create_material(
        &self,
        material_data: CreateMaterialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_material(self, material_data, request).await
    }

    // 按课程（可选类别）列出资料
    pub async fn list_materials(
        &self,
        course_code: &str,
        query: MaterialListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_materials(self, course_code, query, request).await
    }
}
