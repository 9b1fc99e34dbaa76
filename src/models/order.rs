use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order data as submitted by the client inside the `enviarPedido` wrapper.
///
/// Every field is opaque text; absent fields deserialize as empty strings
/// (only `numPedido` and `numDocumento` are later checked for presence).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub num_pedido: String,
    #[serde(default)]
    pub cantidad_pedido: String,
    // camelCase would yield "codigoEAN" → "codigoEan"; the wire name keeps
    // the acronym upper-cased.
    #[serde(rename = "codigoEAN", default)]
    pub codigo_ean: String,
    #[serde(default)]
    pub nombre_producto: String,
    #[serde(default)]
    pub num_documento: String,
    #[serde(default)]
    pub direccion: String,
}

/// Inbound body of `POST /orders/send`: `{ "enviarPedido": { ... } }`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitOrderBody {
    #[serde(rename = "enviarPedido")]
    pub enviar_pedido: Option<OrderRequest>,
}

/// Shipment code and status extracted from the dispatch service's reply.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub codigo_envio: String,
    pub estado: String,
}

/// Outbound body of `POST /orders/send`, mirroring the wrapped request
/// shape: `{ "enviarPedidoRespuesta": { ... } }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitOrderResponse {
    #[serde(rename = "enviarPedidoRespuesta")]
    pub enviar_pedido_respuesta: OrderResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case_wire_names() {
        let body: SubmitOrderBody = serde_json::from_str(
            r#"{
                "enviarPedido": {
                    "numPedido": "1000023",
                    "cantidadPedido": "2",
                    "codigoEAN": "7702129001234",
                    "nombreProducto": "Monitor 24\"",
                    "numDocumento": "52489636",
                    "direccion": "CLL 7 # 19-25, Bogotá"
                }
            }"#,
        )
        .unwrap();

        let req = body.enviar_pedido.unwrap();
        assert_eq!(req.num_pedido, "1000023");
        assert_eq!(req.cantidad_pedido, "2");
        assert_eq!(req.codigo_ean, "7702129001234");
        assert_eq!(req.nombre_producto, "Monitor 24\"");
        assert_eq!(req.num_documento, "52489636");
        assert_eq!(req.direccion, "CLL 7 # 19-25, Bogotá");
    }

    #[test]
    fn absent_fields_default_to_empty_strings() {
        let body: SubmitOrderBody =
            serde_json::from_str(r#"{ "enviarPedido": { "numPedido": "7" } }"#).unwrap();
        let req = body.enviar_pedido.unwrap();
        assert_eq!(req.num_pedido, "7");
        assert_eq!(req.num_documento, "");
        assert_eq!(req.direccion, "");
    }

    #[test]
    fn absent_wrapper_deserializes_to_none() {
        let body: SubmitOrderBody = serde_json::from_str("{}").unwrap();
        assert!(body.enviar_pedido.is_none());
    }

    #[test]
    fn response_serializes_under_named_envelope() {
        let out = SubmitOrderResponse {
            enviar_pedido_respuesta: OrderResponse {
                codigo_envio: "12345".to_string(),
                estado: "Shipped".to_string(),
            },
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "enviarPedidoRespuesta": {
                    "codigoEnvio": "12345",
                    "estado": "Shipped"
                }
            })
        );
    }
}
