use serde::Deserialize;

use super::entities::MaterialKind;

// 资料创建请求。posted_by 取自已认证身份，不信任请求体。
#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub course_code: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub title: String,
    pub file_link: String,
}

// 资料列表查询参数（course_code 在路径中，type 可选收窄）
#[derive(Debug, Default, Deserialize)]
pub struct MaterialListParams {
    #[serde(rename = "type")]
    pub kind: Option<MaterialKind>,
}
