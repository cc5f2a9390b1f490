use super::entities::Material;
use serde::Serialize;

// 资料响应
#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub material: Material,
}

// 资料列表响应（插入顺序，id 升序；无匹配时为空列表而非错误）
#[derive(Debug, Serialize)]
pub struct MaterialListResponse {
    pub items: Vec<Material>,
    pub total: usize,
}
