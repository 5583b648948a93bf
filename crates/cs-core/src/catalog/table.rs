//! Built-in kubectl command table.

use super::{CommandCategory, CommandInfo};

use CommandCategory::{
    Advanced, Basic, Cluster, Config, Debug, Deployment, Network, Resource, Security, Service,
    Storage, Utility,
};

type Row = (
    &'static str,
    CommandCategory,
    u8,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

// (name, category, difficulty, description, syntax, example, concept, related)
#[rustfmt::skip]
const ROWS: &[Row] = &[
    ("kubectl run", Basic, 1,
        "create and start a pod from an image",
        "kubectl run NAME --image=IMAGE",
        "kubectl run nginx --image=nginx",
        "Pod", &["kubectl get pods", "kubectl delete pod"]),
    ("kubectl get pods", Basic, 1,
        "list the pods in a namespace",
        "kubectl get pods [OPTIONS]",
        "kubectl get pods -n kube-system",
        "Pod listing", &["kubectl describe pod"]),
    ("kubectl describe pod", Basic, 1,
        "show the detailed state and events of a pod",
        "kubectl describe pod NAME",
        "kubectl describe pod nginx",
        "Pod details", &["kubectl get pods"]),
    ("kubectl delete pod", Basic, 1,
        "delete a pod",
        "kubectl delete pod NAME [OPTIONS]",
        "kubectl delete pod nginx --grace-period=0",
        "Pod deletion", &["kubectl get pods"]),
    ("kubectl get all", Basic, 1,
        "list every common resource in a namespace",
        "kubectl get all [OPTIONS]",
        "kubectl get all -n default",
        "Resource listing", &["kubectl get pods", "kubectl get services"]),
    ("kubectl delete all", Basic, 2,
        "delete every common resource matching a selector",
        "kubectl delete all NAME [OPTIONS]",
        "kubectl delete all -l app=nginx",
        "Resource deletion", &["kubectl delete pod", "kubectl delete service"]),
    ("kubectl create deployment", Deployment, 2,
        "create a deployment that manages replicated pods",
        "kubectl create deployment NAME --image=IMAGE",
        "kubectl create deployment web --image=nginx",
        "Deployment", &["kubectl get deployments", "kubectl scale"]),
    ("kubectl scale", Deployment, 2,
        "change the number of replicas of a deployment",
        "kubectl scale deployment NAME --replicas=NUM",
        "kubectl scale deployment web --replicas=3",
        "Replica management", &["kubectl get deployments"]),
    ("kubectl get deployments", Deployment, 2,
        "list the deployments in a namespace",
        "kubectl get deployments [OPTIONS]",
        "kubectl get deployments -o wide",
        "Deployment listing", &["kubectl describe deployment"]),
    ("kubectl rollout status", Deployment, 2,
        "watch a deployment until its rollout completes",
        "kubectl rollout status deployment NAME",
        "kubectl rollout status deployment web",
        "Rolling update", &["kubectl rollout undo"]),
    ("kubectl describe deployment", Deployment, 2,
        "show the detailed state of a deployment",
        "kubectl describe deployment NAME",
        "kubectl describe deployment web",
        "Deployment details", &["kubectl get deployments"]),
    ("kubectl delete deployment", Deployment, 2,
        "delete a deployment and its pods",
        "kubectl delete deployment NAME",
        "kubectl delete deployment web",
        "Deployment deletion", &["kubectl get deployments"]),
    ("kubectl expose", Service, 2,
        "expose a deployment as a new service",
        "kubectl expose deployment NAME --port=PORT --type=TYPE",
        "kubectl expose deployment web --port=80 --type=NodePort",
        "Service", &["kubectl get services"]),
    ("kubectl get services", Service, 2,
        "list the services in a namespace",
        "kubectl get services [OPTIONS]",
        "kubectl get services -A",
        "Service listing", &["kubectl describe service"]),
    ("kubectl describe service", Service, 2,
        "show the detailed state of a service",
        "kubectl describe service NAME",
        "kubectl describe service web",
        "Service details", &["kubectl get services"]),
    ("kubectl delete service", Service, 2,
        "delete a service",
        "kubectl delete service NAME",
        "kubectl delete service web",
        "Service deletion", &["kubectl get services"]),
    ("kubectl get endpoints", Service, 3,
        "list the pod addresses backing each service",
        "kubectl get endpoints [OPTIONS]",
        "kubectl get endpoints web",
        "Endpoints", &["kubectl get services"]),
    ("kubectl create configmap", Config, 3,
        "create a configmap from literals or files",
        "kubectl create configmap NAME --from-literal=key=value",
        "kubectl create configmap app-config --from-literal=mode=prod",
        "ConfigMap", &["kubectl get configmaps"]),
    ("kubectl create secret", Config, 3,
        "create a secret holding sensitive values",
        "kubectl create secret generic NAME --from-literal=key=value",
        "kubectl create secret generic db --from-literal=password=s3cr3t",
        "Secret", &["kubectl get secrets"]),
    ("kubectl get configmaps", Config, 2,
        "list the configmaps in a namespace",
        "kubectl get configmaps [OPTIONS]",
        "kubectl get configmaps",
        "ConfigMap listing", &["kubectl describe configmap"]),
    ("kubectl describe configmap", Config, 2,
        "show the keys and values of a configmap",
        "kubectl describe configmap NAME",
        "kubectl describe configmap app-config",
        "ConfigMap details", &["kubectl get configmaps"]),
    ("kubectl delete configmap", Config, 2,
        "delete a configmap",
        "kubectl delete configmap NAME",
        "kubectl delete configmap app-config",
        "ConfigMap deletion", &["kubectl get configmaps"]),
    ("kubectl get pv", Storage, 3,
        "list the persistent volumes of the cluster",
        "kubectl get pv [OPTIONS]",
        "kubectl get pv",
        "PersistentVolume", &["kubectl get pvc"]),
    ("kubectl get pvc", Storage, 3,
        "list the persistent volume claims in a namespace",
        "kubectl get pvc [OPTIONS]",
        "kubectl get pvc -n data",
        "PersistentVolumeClaim", &["kubectl get pv"]),
    ("kubectl apply", Storage, 3,
        "create or update resources from a manifest file",
        "kubectl apply -f FILENAME",
        "kubectl apply -f volume-claim.yaml",
        "Declarative configuration", &["kubectl replace"]),
    ("kubectl delete pvc", Storage, 3,
        "delete a persistent volume claim",
        "kubectl delete pvc NAME",
        "kubectl delete pvc data-claim",
        "Claim deletion", &["kubectl get pvc"]),
    ("kubectl get storageclasses", Storage, 4,
        "list the storage classes available for provisioning",
        "kubectl get storageclasses [OPTIONS]",
        "kubectl get storageclasses",
        "StorageClass", &["kubectl get pv"]),
    ("kubectl delete pv", Storage, 4,
        "delete a persistent volume",
        "kubectl delete pv NAME",
        "kubectl delete pv pv-0001",
        "Volume deletion", &["kubectl get pv"]),
    ("kubectl top", Resource, 3,
        "show cpu and memory usage of pods",
        "kubectl top pods [OPTIONS]",
        "kubectl top pods --sort-by=cpu",
        "Resource monitoring", &["kubectl top node"]),
    ("kubectl top node", Resource, 3,
        "show cpu and memory usage of nodes",
        "kubectl top node [OPTIONS]",
        "kubectl top node",
        "Node monitoring", &["kubectl top"]),
    ("kubectl get nodes", Resource, 2,
        "list the nodes of the cluster",
        "kubectl get nodes [OPTIONS]",
        "kubectl get nodes -o wide",
        "Node listing", &["kubectl describe node"]),
    ("kubectl describe node", Resource, 3,
        "show capacity, conditions and pods of a node",
        "kubectl describe node NAME",
        "kubectl describe node worker-1",
        "Node details", &["kubectl get nodes"]),
    ("kubectl label node", Resource, 3,
        "attach a label to a node",
        "kubectl label node NAME KEY=VALUE",
        "kubectl label node worker-1 disk=ssd",
        "Node labels", &["kubectl get nodes"]),
    ("kubectl taint node", Resource, 4,
        "add a taint that repels pods from a node",
        "kubectl taint node NAME KEY=VALUE:EFFECT",
        "kubectl taint node worker-1 gpu=true:NoSchedule",
        "Node taints", &["kubectl untaint node"]),
    ("kubectl untaint node", Resource, 4,
        "remove a taint from a node",
        "kubectl taint node NAME KEY:EFFECT-",
        "kubectl taint node worker-1 gpu:NoSchedule-",
        "Taint removal", &["kubectl taint node"]),
    ("kubectl cordon node", Resource, 3,
        "mark a node unschedulable",
        "kubectl cordon NAME",
        "kubectl cordon worker-1",
        "Scheduling control", &["kubectl uncordon node"]),
    ("kubectl uncordon node", Resource, 3,
        "mark a node schedulable again",
        "kubectl uncordon NAME",
        "kubectl uncordon worker-1",
        "Scheduling control", &["kubectl cordon node"]),
    ("kubectl drain node", Resource, 4,
        "evict every pod from a node before maintenance",
        "kubectl drain NAME [OPTIONS]",
        "kubectl drain worker-1 --ignore-daemonsets",
        "Node maintenance", &["kubectl cordon node"]),
    ("kubectl cp", Resource, 3,
        "copy files between the local machine and a container",
        "kubectl cp LOCAL_PATH POD:REMOTE_PATH",
        "kubectl cp ./app.conf nginx:/etc/app.conf",
        "File copy", &["kubectl exec"]),
    ("kubectl annotate", Resource, 4,
        "attach an annotation to a resource",
        "kubectl annotate RESOURCE NAME KEY=VALUE",
        "kubectl annotate pod nginx owner=platform",
        "Annotations", &["kubectl label node"]),
    ("kubectl logs", Debug, 3,
        "print the logs of a container",
        "kubectl logs POD [OPTIONS]",
        "kubectl logs nginx --tail=50",
        "Container logs", &["kubectl logs -f"]),
    ("kubectl logs -f", Debug, 3,
        "stream the logs of a container as they are written",
        "kubectl logs -f POD [OPTIONS]",
        "kubectl logs -f nginx",
        "Log streaming", &["kubectl logs"]),
    ("kubectl exec", Debug, 3,
        "run a command inside a running container",
        "kubectl exec POD -- COMMAND",
        "kubectl exec -it nginx -- /bin/sh",
        "Container shell", &["kubectl logs"]),
    ("kubectl port-forward", Debug, 3,
        "forward a local port to a port on a pod",
        "kubectl port-forward POD LOCAL_PORT:REMOTE_PORT",
        "kubectl port-forward nginx 8080:80",
        "Port forwarding", &["kubectl exec"]),
    ("kubectl events", Debug, 3,
        "list recent cluster events",
        "kubectl events [OPTIONS]",
        "kubectl events --for pod/nginx",
        "Event stream", &["kubectl get events"]),
    ("kubectl get events", Debug, 3,
        "list events recorded in a namespace",
        "kubectl get events [OPTIONS]",
        "kubectl get events --sort-by=.metadata.creationTimestamp",
        "Event query", &["kubectl describe pod"]),
    ("kubectl debug", Debug, 4,
        "attach an ephemeral debugging container to a pod",
        "kubectl debug POD [OPTIONS]",
        "kubectl debug -it nginx --image=busybox",
        "Pod debugging", &["kubectl exec"]),
    ("kubectl patch", Advanced, 4,
        "update fields of a live resource with a patch",
        "kubectl patch TYPE NAME -p PATCH",
        "kubectl patch deployment web -p '{\"spec\":{\"replicas\":2}}'",
        "Patching", &["kubectl apply"]),
    ("kubectl set image", Advanced, 4,
        "change the container image of a deployment",
        "kubectl set image deployment NAME CONTAINER=IMAGE",
        "kubectl set image deployment web nginx=nginx:1.27",
        "Image update", &["kubectl rollout status"]),
    ("kubectl rollout undo", Advanced, 4,
        "roll a deployment back to its previous revision",
        "kubectl rollout undo deployment NAME",
        "kubectl rollout undo deployment web",
        "Rollback", &["kubectl rollout history"]),
    ("kubectl rollout history", Advanced, 4,
        "list the revisions of a deployment",
        "kubectl rollout history deployment NAME",
        "kubectl rollout history deployment web",
        "Revision history", &["kubectl rollout undo"]),
    ("kubectl replace", Advanced, 4,
        "replace a resource with the contents of a file",
        "kubectl replace -f FILENAME",
        "kubectl replace -f web.yaml",
        "Resource replacement", &["kubectl apply"]),
    ("kubectl edit", Advanced, 4,
        "edit a live resource in your editor",
        "kubectl edit TYPE NAME",
        "kubectl edit deployment web",
        "Live editing", &["kubectl patch"]),
    ("kubectl cluster-info", Cluster, 4,
        "show the addresses of the control plane and cluster services",
        "kubectl cluster-info",
        "kubectl cluster-info",
        "Cluster information", &["kubectl get nodes"]),
    ("kubectl config view", Cluster, 4,
        "show the merged kubeconfig settings",
        "kubectl config view",
        "kubectl config view --minify",
        "Kubeconfig", &["kubectl cluster-info"]),
    ("kubectl api-resources", Cluster, 4,
        "list the resource types the API server supports",
        "kubectl api-resources [OPTIONS]",
        "kubectl api-resources --namespaced=true",
        "API resources", &["kubectl cluster-info"]),
    ("kubectl get networkpolicies", Network, 5,
        "list the network policies in a namespace",
        "kubectl get networkpolicies [OPTIONS]",
        "kubectl get networkpolicies -A",
        "NetworkPolicy", &["kubectl describe networkpolicy"]),
    ("kubectl describe networkpolicy", Network, 5,
        "show the rules of a network policy",
        "kubectl describe networkpolicy NAME",
        "kubectl describe networkpolicy deny-all",
        "NetworkPolicy details", &["kubectl get networkpolicies"]),
    ("kubectl create networkpolicy", Network, 5,
        "create a network policy from a manifest",
        "kubectl create -f POLICY_FILE",
        "kubectl create -f deny-all.yaml",
        "NetworkPolicy creation", &["kubectl get networkpolicies"]),
    ("kubectl delete networkpolicy", Network, 5,
        "delete a network policy",
        "kubectl delete networkpolicy NAME",
        "kubectl delete networkpolicy deny-all",
        "NetworkPolicy deletion", &["kubectl get networkpolicies"]),
    ("kubectl get ingress", Network, 4,
        "list the ingress rules in a namespace",
        "kubectl get ingress [OPTIONS]",
        "kubectl get ingress -A",
        "Ingress", &["kubectl describe ingress"]),
    ("kubectl describe ingress", Network, 4,
        "show the hosts and backends of an ingress",
        "kubectl describe ingress NAME",
        "kubectl describe ingress web",
        "Ingress details", &["kubectl get ingress"]),
    ("kubectl delete ingress", Network, 4,
        "delete an ingress",
        "kubectl delete ingress NAME",
        "kubectl delete ingress web",
        "Ingress deletion", &["kubectl get ingress"]),
    ("kubectl get roles", Security, 5,
        "list the RBAC roles in a namespace",
        "kubectl get roles [OPTIONS]",
        "kubectl get roles -n dev",
        "Role", &["kubectl get rolebindings"]),
    ("kubectl get rolebindings", Security, 5,
        "list the RBAC role bindings in a namespace",
        "kubectl get rolebindings [OPTIONS]",
        "kubectl get rolebindings -n dev",
        "RoleBinding", &["kubectl get roles"]),
    ("kubectl get clusterroles", Security, 5,
        "list the cluster-wide RBAC roles",
        "kubectl get clusterroles [OPTIONS]",
        "kubectl get clusterroles",
        "ClusterRole", &["kubectl get clusterrolebindings"]),
    ("kubectl get clusterrolebindings", Security, 5,
        "list the cluster-wide RBAC role bindings",
        "kubectl get clusterrolebindings [OPTIONS]",
        "kubectl get clusterrolebindings",
        "ClusterRoleBinding", &["kubectl get clusterroles"]),
    ("kubectl create role", Security, 5,
        "create a role granting verbs on resources",
        "kubectl create role NAME --verb=VERB --resource=RESOURCE",
        "kubectl create role reader --verb=get,list --resource=pods",
        "Role creation", &["kubectl get roles"]),
    ("kubectl create rolebinding", Security, 5,
        "bind a role to a user or service account",
        "kubectl create rolebinding NAME --role=ROLE --user=USER",
        "kubectl create rolebinding read-pods --role=reader --user=jane",
        "RoleBinding creation", &["kubectl get rolebindings"]),
    ("kubectl create secret docker-registry", Security, 4,
        "create a secret for pulling from a private registry",
        "kubectl create secret docker-registry NAME --docker-server=SERVER --docker-username=USER --docker-password=PASSWORD",
        "kubectl create secret docker-registry regcred --docker-server=registry.example.com --docker-username=ci --docker-password=token",
        "Registry credentials", &["kubectl get secrets"]),
    ("kubectl get secrets", Security, 4,
        "list the secrets in a namespace",
        "kubectl get secrets [OPTIONS]",
        "kubectl get secrets",
        "Secret listing", &["kubectl describe secret"]),
    ("kubectl describe secret", Security, 4,
        "show the keys and sizes stored in a secret",
        "kubectl describe secret NAME",
        "kubectl describe secret db",
        "Secret details", &["kubectl get secrets"]),
    ("kubectl delete secret", Security, 4,
        "delete a secret",
        "kubectl delete secret NAME",
        "kubectl delete secret db",
        "Secret deletion", &["kubectl get secrets"]),
    ("kubectl auth can-i", Security, 5,
        "check whether an action is allowed",
        "kubectl auth can-i VERB RESOURCE [--namespace=NAMESPACE]",
        "kubectl auth can-i create deployments --namespace dev",
        "Permission check", &["kubectl get roles"]),
    ("kubectl get serviceaccounts", Security, 4,
        "list the service accounts in a namespace",
        "kubectl get serviceaccounts [OPTIONS]",
        "kubectl get serviceaccounts -n dev",
        "ServiceAccount", &["kubectl describe serviceaccount"]),
    ("kubectl describe serviceaccount", Security, 4,
        "show the secrets and tokens of a service account",
        "kubectl describe serviceaccount NAME",
        "kubectl describe serviceaccount builder",
        "ServiceAccount details", &["kubectl get serviceaccounts"]),
    ("kubectl completion", Utility, 2,
        "generate shell completion scripts",
        "kubectl completion SHELL",
        "kubectl completion bash",
        "Shell completion", &["kubectl version"]),
    ("kubectl version", Utility, 1,
        "print the client and server versions",
        "kubectl version [OPTIONS]",
        "kubectl version --client",
        "Version information", &["kubectl cluster-info"]),
    ("kubectl plugin list", Utility, 3,
        "list the kubectl plugins on the PATH",
        "kubectl plugin list",
        "kubectl plugin list",
        "Plugins", &["kubectl version"]),
];

/// The built-in command list.
pub(super) fn builtin() -> Vec<CommandInfo> {
    ROWS.iter()
        .map(
            |&(name, category, difficulty, description, syntax, example, concept, related)| {
                CommandInfo::new(name, category, difficulty)
                    .with_description(description)
                    .with_syntax(syntax)
                    .with_example(example)
                    .with_concept(concept)
                    .with_related(related)
            },
        )
        .collect()
}
