use std::fmt::Write;

use quick_xml::escape::escape;

use crate::models::order::OrderRequest;

/// SOAPAction header value expected by the dispatch service.
pub const SOAP_ACTION: &str = "http://WSDLs/EnvioPedidos/EnvioPedidosAcme/EnvioPedidoAcme";

const SOAPENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const SERVICE_NS: &str = "http://WSDLs/EnvioPedidos/EnvioPedidosAcme";

/// Fixed JSON-field → XML-element correspondence, in envelope order.
///
/// The element names come from the dispatch service's WSDL and must not be
/// derived from the Rust field names.
pub fn field_elements(req: &OrderRequest) -> [(&'static str, &str); 6] {
    [
        ("pedido", req.num_pedido.as_str()),
        ("Cantidad", req.cantidad_pedido.as_str()),
        ("EAN", req.codigo_ean.as_str()),
        ("Producto", req.nombre_producto.as_str()),
        ("Cedula", req.num_documento.as_str()),
        ("Direccion", req.direccion.as_str()),
    ]
}

/// Builds the SOAP envelope for one order submission.
///
/// Field values are XML-escaped before insertion so markup characters in
/// client input cannot break or inject into the envelope.
pub fn build(req: &OrderRequest) -> String {
    let mut fields = String::new();
    for (element, value) in field_elements(req) {
        let _ = writeln!(fields, "        <{0}>{1}</{0}>", element, escape(value));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope
    xmlns:soapenv="{SOAPENV_NS}"
    xmlns:env="{SERVICE_NS}">
  <soapenv:Header/>
  <soapenv:Body>
    <env:EnvioPedidoAcme>
      <EnvioPedidoRequest>
{fields}      </EnvioPedidoRequest>
    </env:EnvioPedidoAcme>
  </soapenv:Body>
</soapenv:Envelope>"#
    )
}
